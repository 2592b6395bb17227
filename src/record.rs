//! Location records as they come out of document extraction
//!
//! Every field is optional: OCR routinely misses or garbles values. A
//! record resolves to a geographic position when it carries either a
//! latitude/longitude pair (used as-is) or an easting/northing pair
//! (converted, zone falling back to the operating zone).

use std::fs::File;
use std::io;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geometry::{planar_centroid, BoundingBox};
use crate::projection::{GeographicCoordinate, Transformer, UtmCoordinate};
use crate::validation::{is_valid_geographic, is_valid_utm};

/// Marker written to CSV output for rows that could not be placed
pub const UNRESOLVED: &str = "UNRESOLVED";

/// A location as extracted from a document, with any field possibly missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub utm_x: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub utm_y: Option<f64>,
    #[serde(default)]
    pub utm_zone: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
}

/// Where a resolved position came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// Latitude/longitude were present in the record
    Extracted,
    /// Position was computed from the UTM fields
    ConvertedFromUtm,
}

impl LocationSource {
    /// Returns the name used in CSV output
    pub fn name(&self) -> &'static str {
        match self {
            LocationSource::Extracted => "extracted",
            LocationSource::ConvertedFromUtm => "converted_from_utm",
        }
    }
}

/// A record placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub name: Option<String>,
    pub coordinate: GeographicCoordinate,
    pub source: LocationSource,
    /// Zone string as extracted, for display
    pub zone: Option<String>,
    /// True when the UTM zone was unreadable and the operating zone was used
    pub zone_fallback: bool,
    /// Result of the range checks; out-of-range records are flagged, not dropped
    pub valid: bool,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl ExtractedLocation {
    /// Creates a record holding only a UTM triple
    pub fn from_utm(easting: f64, northing: f64, zone: impl Into<String>) -> Self {
        Self {
            utm_x: Some(easting),
            utm_y: Some(northing),
            utm_zone: Some(zone.into()),
            ..Self::default()
        }
    }

    /// Creates a record holding only latitude/longitude
    pub fn from_geographic(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    /// Extracted latitude/longitude, if both are present and finite
    pub fn geographic(&self) -> Option<GeographicCoordinate> {
        Some(GeographicCoordinate::new(finite(self.latitude)?, finite(self.longitude)?))
    }

    /// Extracted UTM coordinate, if easting and northing are present and finite
    ///
    /// A missing zone is left empty so resolution falls back to the operating zone.
    pub fn utm(&self) -> Option<UtmCoordinate> {
        Some(UtmCoordinate::new(
            finite(self.utm_x)?,
            finite(self.utm_y)?,
            self.utm_zone.clone().unwrap_or_default(),
        ))
    }

    /// Places the record, preferring extracted latitude/longitude over UTM
    pub fn resolve(&self, transformer: &Transformer) -> Option<ResolvedLocation> {
        if let Some(coordinate) = self.geographic() {
            return Some(ResolvedLocation {
                name: self.name.clone(),
                coordinate,
                source: LocationSource::Extracted,
                zone: self.utm_zone.clone(),
                zone_fallback: false,
                valid: is_valid_geographic(&coordinate),
            });
        }

        let utm = self.utm()?;
        let conversion = transformer.utm_to_geographic_detailed(&utm);
        Some(ResolvedLocation {
            name: self.name.clone(),
            coordinate: conversion.coordinate,
            source: LocationSource::ConvertedFromUtm,
            zone: self.utm_zone.clone(),
            zone_fallback: conversion.zone_fallback,
            valid: is_valid_utm(&utm) && is_valid_geographic(&conversion.coordinate),
        })
    }
}

/// Resolves records in parallel, keeping input order
pub fn resolve_all(locations: &[ExtractedLocation], transformer: &Transformer) -> Vec<Option<ResolvedLocation>> {
    debug!(count = locations.len(), "resolving extracted locations");
    locations.par_iter().map(|location| location.resolve(transformer)).collect()
}

/// A permit footprint: resolved vertices with their centroid and envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub vertices: Vec<GeographicCoordinate>,
    pub centroid: GeographicCoordinate,
    pub bounds: BoundingBox,
    /// Records that could not be placed and were left out of the ring
    pub skipped: usize,
}

/// Builds a footprint from the vertex records that resolve
///
/// # Errors
/// Returns [`Error::InvalidInput`] if no vertex resolves.
pub fn resolve_footprint(locations: &[ExtractedLocation], transformer: &Transformer) -> Result<Footprint> {
    let vertices: Vec<GeographicCoordinate> = locations
        .iter()
        .filter_map(|location| location.resolve(transformer))
        .map(|resolved| resolved.coordinate)
        .collect();

    let centroid = planar_centroid(&vertices)?;
    let bounds = BoundingBox::from_points(&vertices)
        .ok_or_else(|| Error::InvalidInput("footprint has no vertices".to_string()))?;

    Ok(Footprint {
        skipped: locations.len() - vertices.len(),
        vertices,
        centroid,
        bounds,
    })
}

/// Reads extracted records from CSV
///
/// Expected headers are `name,utm_x,utm_y,utm_zone,latitude,longitude`; any
/// may be missing and empty cells count as absent. Rows that cannot be
/// parsed are skipped; a garbled numeric cell only blanks that cell.
pub fn read_locations<R: io::Read>(reader: R) -> Result<Vec<ExtractedLocation>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut locations = Vec::new();

    for (row, result) in csv_reader.deserialize().enumerate() {
        match result {
            Ok(location) => locations.push(location),
            Err(e) => warn!(row = row + 1, error = %e, "skipping unreadable CSV row"),
        }
    }

    Ok(locations)
}

/// Reads extracted records from a CSV file
pub fn read_locations_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ExtractedLocation>> {
    read_locations(File::open(path)?)
}

#[derive(Serialize)]
struct ResolvedRow<'a> {
    name: &'a str,
    utm_x: Option<f64>,
    utm_y: Option<f64>,
    utm_zone: &'a str,
    resolved_latitude: String,
    resolved_longitude: String,
    source: &'a str,
    zone_fallback: bool,
    valid: bool,
}

/// Writes records with their resolution as CSV
pub fn write_resolved<W: io::Write>(
    writer: W,
    locations: &[ExtractedLocation],
    resolved: &[Option<ResolvedLocation>],
) -> Result<()> {
    if locations.len() != resolved.len() {
        return Err(Error::InvalidInput(format!(
            "{} records but {} resolutions",
            locations.len(),
            resolved.len()
        )));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);

    for (location, resolution) in locations.iter().zip(resolved) {
        let (latitude, longitude, source, zone_fallback, valid) = match resolution {
            Some(r) => (
                format!("{:.6}", r.coordinate.latitude),
                format!("{:.6}", r.coordinate.longitude),
                r.source.name(),
                r.zone_fallback,
                r.valid,
            ),
            None => (UNRESOLVED.to_string(), UNRESOLVED.to_string(), UNRESOLVED, false, false),
        };

        csv_writer.serialize(ResolvedRow {
            name: location.name.as_deref().unwrap_or(""),
            utm_x: location.utm_x,
            utm_y: location.utm_y,
            utm_zone: location.utm_zone.as_deref().unwrap_or(""),
            resolved_latitude: latitude,
            resolved_longitude: longitude,
            source,
            zone_fallback,
            valid,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_prefers_extracted_geographic() {
        let location = ExtractedLocation {
            latitude: Some(18.5),
            longitude: Some(-69.9),
            ..ExtractedLocation::from_utm(561_063.0, 2_066_147.0, "19Q")
        };
        let resolved = location.resolve(&Transformer::default()).unwrap();
        assert_eq!(resolved.source, LocationSource::Extracted);
        assert_eq!(resolved.coordinate, GeographicCoordinate::new(18.5, -69.9));
        assert_eq!(resolved.zone.as_deref(), Some("19Q"));
        assert!(resolved.valid);
    }

    #[test]
    fn test_converts_utm_when_geographic_missing() {
        let location = ExtractedLocation {
            latitude: Some(18.5),
            ..ExtractedLocation::from_utm(561_063.0, 2_066_147.0, "19Q")
        };
        let resolved = location.resolve(&Transformer::default()).unwrap();
        assert_eq!(resolved.source, LocationSource::ConvertedFromUtm);
        assert!((resolved.coordinate.latitude - 18.6857).abs() < 0.001);
        assert!(!resolved.zone_fallback);
        // 19Q is readable for conversion but not a strict <N|S> zone
        assert!(!resolved.valid);
    }

    #[test]
    fn test_missing_zone_falls_back() {
        let location = ExtractedLocation {
            utm_zone: None,
            ..ExtractedLocation::from_utm(561_063.0, 2_066_147.0, "")
        };
        let resolved = location.resolve(&Transformer::default()).unwrap();
        assert!(resolved.zone_fallback);
        assert_eq!(resolved.zone, None);
    }

    #[test]
    fn test_unresolvable_records() {
        let transformer = Transformer::default();
        assert!(ExtractedLocation::default().resolve(&transformer).is_none());

        let only_easting = ExtractedLocation {
            utm_x: Some(561_063.0),
            ..ExtractedLocation::default()
        };
        assert!(only_easting.resolve(&transformer).is_none());

        let nan = ExtractedLocation::from_geographic(f64::NAN, -69.9);
        assert!(nan.resolve(&transformer).is_none());
    }

    #[test]
    fn test_out_of_range_is_flagged_not_dropped() {
        let resolved = ExtractedLocation::from_geographic(95.0, -69.9)
            .resolve(&Transformer::default())
            .unwrap();
        assert!(!resolved.valid);
    }

    #[test]
    fn test_resolve_all_keeps_order() {
        let locations = vec![
            ExtractedLocation::from_geographic(18.5, -69.9),
            ExtractedLocation::default(),
            ExtractedLocation::from_utm(561_063.0, 2_066_147.0, "19N"),
        ];
        let resolved = resolve_all(&locations, &Transformer::default());
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].as_ref().unwrap().source, LocationSource::Extracted);
        assert!(resolved[1].is_none());
        assert_eq!(resolved[2].as_ref().unwrap().source, LocationSource::ConvertedFromUtm);
    }

    #[test]
    fn test_footprint() {
        let transformer = Transformer::default();
        let corners = [
            (560_000.0, 2_066_000.0),
            (560_200.0, 2_066_000.0),
            (560_200.0, 2_066_200.0),
            (560_000.0, 2_066_200.0),
        ];
        let mut locations: Vec<_> = corners
            .iter()
            .map(|&(x, y)| ExtractedLocation::from_utm(x, y, "19N"))
            .collect();
        locations.push(ExtractedLocation::default());

        let footprint = resolve_footprint(&locations, &transformer).unwrap();
        assert_eq!(footprint.vertices.len(), 4);
        assert_eq!(footprint.skipped, 1);

        let center = transformer.utm_to_geographic(&UtmCoordinate::new(560_100.0, 2_066_100.0, "19N"));
        assert!(crate::geometry::haversine_distance(&footprint.centroid, &center) < 1.0);
        assert!(footprint.bounds.contains(&footprint.centroid));
    }

    #[test]
    fn test_footprint_without_vertices() {
        let result = resolve_footprint(&[ExtractedLocation::default()], &Transformer::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_read_locations_with_gaps() {
        let data = "name,utm_x,utm_y,utm_zone,latitude,longitude\n\
                    permit-1,561063,2066147,19Q,,\n\
                    permit-2,,,,18.5,-69.9\n\
                    permit-3,5610 63,2066147,19N,18.5,-69.9\n\
                    permit-4,,,,,\n";
        let locations = read_locations(data.as_bytes()).unwrap();
        assert_eq!(locations.len(), 4);
        assert_eq!(locations[0].utm_zone.as_deref(), Some("19Q"));
        assert_eq!(locations[0].latitude, None);
        assert_eq!(locations[1].longitude, Some(-69.9));
        assert_eq!(locations[3], ExtractedLocation { name: Some("permit-4".to_string()), ..Default::default() });
    }

    #[test]
    fn test_garbled_cell_keeps_row() {
        let data = "name,utm_x,utm_y,utm_zone,latitude,longitude\n\
                    permit-3,5610 63,2066147,19N,18.5,-69.9\n\
                    permit-5,561063,2066147,19N,norte,\n";
        let locations = read_locations(data.as_bytes()).unwrap();
        assert_eq!(locations.len(), 2);

        assert_eq!(locations[0].utm_x, None);
        assert_eq!(locations[0].utm_y, Some(2_066_147.0));
        let resolved = locations[0].resolve(&Transformer::default()).unwrap();
        assert_eq!(resolved.source, LocationSource::Extracted);
        assert_eq!(resolved.coordinate, GeographicCoordinate::new(18.5, -69.9));

        assert_eq!(locations[1].latitude, None);
        let resolved = locations[1].resolve(&Transformer::default()).unwrap();
        assert_eq!(resolved.source, LocationSource::ConvertedFromUtm);
    }

    #[test]
    fn test_json_records_with_missing_and_null_fields() {
        let locations: Vec<ExtractedLocation> =
            serde_json::from_str(r#"[{"utm_x": 561063, "utm_y": null}, {"latitude": 18.5, "longitude": -69.9}]"#).unwrap();
        assert_eq!(locations[0].utm_x, Some(561_063.0));
        assert_eq!(locations[0].utm_y, None);
        assert_eq!(locations[1], ExtractedLocation::from_geographic(18.5, -69.9));
    }

    #[test]
    fn test_read_locations_partial_headers() {
        let data = "latitude,longitude\n18.5,-69.9\n";
        let locations = read_locations(data.as_bytes()).unwrap();
        assert_eq!(locations, vec![ExtractedLocation::from_geographic(18.5, -69.9)]);
    }

    #[test]
    fn test_read_from_file_and_write() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,utm_x,utm_y,utm_zone").unwrap();
        writeln!(file, "a,561063,2066147,19N").unwrap();
        writeln!(file, "b,,,").unwrap();

        let locations = read_locations_from_path(file.path()).unwrap();
        let resolved = resolve_all(&locations, &Transformer::default());

        let mut out = Vec::new();
        write_resolved(&mut out, &locations, &resolved).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "name,utm_x,utm_y,utm_zone,resolved_latitude,resolved_longitude,source,zone_fallback,valid"
        );
        assert!(lines[1].starts_with("a,561063.0,2066147.0,19N,18.68"));
        assert!(lines[1].ends_with("converted_from_utm,false,true"));
        assert_eq!(lines[2], "b,,,,UNRESOLVED,UNRESOLVED,UNRESOLVED,false,false");
    }

    #[test]
    fn test_write_rejects_mismatched_lengths() {
        let result = write_resolved(Vec::new(), &[ExtractedLocation::default()], &[]);
        assert!(result.is_err());
    }
}
