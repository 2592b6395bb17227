//! PROJ-backed UTM projection, used to cross-check the series implementation

use proj::Proj;

use crate::error::{Error, Result};
use crate::projection::coordinate::GeographicCoordinate;
use crate::types::{Hemisphere, UtmZone};

/// EPSG code of WGS84 geographic coordinates
pub const WGS84_EPSG: u16 = 4326;

/// EPSG code of the WGS84 / UTM CRS for a zone (326xx north, 327xx south)
pub fn utm_epsg(zone: UtmZone) -> u16 {
    let base = match zone.hemisphere() {
        Hemisphere::North => 32600,
        Hemisphere::South => 32700,
    };
    base + zone.number() as u16
}

/// Forward and inverse UTM projection for one zone through PROJ
pub struct ProjReference {
    forward: Proj,
    inverse: Proj,
    zone: UtmZone,
}

impl ProjReference {
    /// Creates the reference projection for a zone
    pub fn for_zone(zone: UtmZone) -> Result<Self> {
        let geographic = format!("EPSG:{}", WGS84_EPSG);
        let projected = format!("EPSG:{}", utm_epsg(zone));

        let forward = Proj::new_known_crs(&geographic, &projected, None)
            .map_err(|e| Error::Projection(format!("Failed to create projection for {}: {}", zone, e)))?;
        let inverse = Proj::new_known_crs(&projected, &geographic, None)
            .map_err(|e| Error::Projection(format!("Failed to create inverse projection for {}: {}", zone, e)))?;

        Ok(Self { forward, inverse, zone })
    }

    /// Projects latitude/longitude to unrounded easting/northing
    pub fn to_utm(&self, coord: &GeographicCoordinate) -> Result<(f64, f64)> {
        self.forward
            .convert((coord.longitude, coord.latitude))
            .map_err(|e| Error::Projection(format!("Projection failed: {}", e)))
    }

    /// Unprojects easting/northing to latitude/longitude
    pub fn to_geographic(&self, easting: f64, northing: f64) -> Result<GeographicCoordinate> {
        let (lon, lat) = self
            .inverse
            .convert((easting, northing))
            .map_err(|e| Error::Projection(format!("Unprojection failed: {}", e)))?;

        Ok(GeographicCoordinate::from_lonlat(lon, lat))
    }

    /// Returns the zone this reference projects into
    pub fn zone(&self) -> UtmZone {
        self.zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::haversine_distance;
    use crate::projection::Transformer;

    #[test]
    fn test_epsg_codes() {
        assert_eq!(utm_epsg(UtmZone::default()), 32619);
        assert_eq!(utm_epsg(UtmZone::new(34, Hemisphere::South).unwrap()), 32734);
    }

    #[test]
    fn test_series_matches_proj() {
        let zone = UtmZone::default();
        let reference = ProjReference::for_zone(zone).unwrap();
        let transformer = Transformer::default();

        for &(lat, lon) in &[(18.4861, -69.9312), (19.45, -70.69), (17.6, -71.9), (19.9, -68.1)] {
            let point = GeographicCoordinate::new(lat, lon);

            let (easting, northing) = reference.to_utm(&point).unwrap();
            let (series_e, series_n) = transformer.geographic_to_utm_in_zone(&point, zone);
            assert!((easting - series_e).abs() < 1.0);
            assert!((northing - series_n).abs() < 1.0);

            let back = reference.to_geographic(series_e, series_n).unwrap();
            assert!(haversine_distance(&point, &back) < 1.0);
        }
    }
}
