//! utmkit - UTM / WGS84 coordinate engine
//!
//! utmkit converts between UTM projected coordinates and WGS84
//! latitude/longitude, computes planar polygon centroids and great-circle
//! distances, and range-checks coordinates. It is tuned for permit
//! footprints in the Dominican Republic (UTM zone 19 north), but the
//! operating zone is configuration, not an assumption baked into the math.
//!
//! Every operation is a pure computation: no shared state, no I/O, safe to
//! call from any thread.
//!
//! # Examples
//!
//! ## Converting coordinates
//!
//! ```
//! use utmkit::{utm_to_geographic, geographic_to_utm, UtmCoordinate};
//!
//! let geo = utm_to_geographic(&UtmCoordinate::new(561_063.0, 2_066_147.0, "19Q"));
//! assert!((geo.latitude - 18.6857).abs() < 0.001);
//!
//! let utm = geographic_to_utm(&geo);
//! assert_eq!(utm.zone, "19N");
//! ```
//!
//! ## Detecting zone fallback
//!
//! ```
//! use utmkit::{Transformer, UtmCoordinate};
//!
//! let transformer = Transformer::default();
//! let conversion = transformer.utm_to_geographic_detailed(&UtmCoordinate::new(530_478.0, 2_042_873.0, "??"));
//! assert!(conversion.zone_fallback);
//! ```
//!
//! ## Footprint centroid
//!
//! ```
//! use utmkit::{polygon_centroid, haversine_distance, GeographicCoordinate};
//!
//! let ring = [
//!     GeographicCoordinate::new(18.48, -69.94),
//!     GeographicCoordinate::new(18.48, -69.92),
//!     GeographicCoordinate::new(18.50, -69.92),
//!     GeographicCoordinate::new(18.50, -69.94),
//! ];
//! let centroid = polygon_centroid(&ring)?;
//! println!("{} m from the first corner", haversine_distance(&ring[0], &centroid));
//! # Ok::<(), utmkit::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod record;
pub mod types;
pub mod validation;

pub use config::{EngineConfig, ServerConfig};
pub use error::{Error, Result};
pub use geometry::{planar_centroid, BoundingBox};
pub use projection::{
    Ellipsoid, GeographicCoordinate, PolygonPoint, Transformer, UtmConversion, UtmCoordinate, ZoneResolution,
};
pub use record::{ExtractedLocation, LocationSource, ResolvedLocation};
pub use types::{Hemisphere, UtmZone};
pub use validation::{is_valid_geographic, is_valid_utm};

/// Converts UTM to latitude/longitude with the default configuration (operating zone 19N)
pub fn utm_to_geographic(utm: &UtmCoordinate) -> GeographicCoordinate {
    Transformer::default().utm_to_geographic(utm)
}

/// Converts latitude/longitude to UTM, rounded to whole meters
pub fn geographic_to_utm(geographic: &GeographicCoordinate) -> UtmCoordinate {
    Transformer::default().geographic_to_utm(geographic)
}

/// Planar centroid of a polygon ring; see [`geometry::planar_centroid`] for its limits
pub fn polygon_centroid(points: &[PolygonPoint]) -> Result<GeographicCoordinate> {
    planar_centroid(points)
}

/// Great-circle distance in meters
pub fn haversine_distance(a: &GeographicCoordinate, b: &GeographicCoordinate) -> f64 {
    geometry::haversine_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_letter_property() {
        let q = utm_to_geographic(&UtmCoordinate::new(530_478.0, 2_042_873.0, "19Q"));
        let n = utm_to_geographic(&UtmCoordinate::new(530_478.0, 2_042_873.0, "19N"));
        assert!((q.latitude - n.latitude).abs() < 0.0001);
        assert!((q.longitude - n.longitude).abs() < 0.0001);
    }

    #[test]
    fn test_free_functions() {
        let a = GeographicCoordinate::new(18.4861, -69.9312);
        let b = GeographicCoordinate::new(19.4517, -70.6970);
        assert_eq!(haversine_distance(&a, &a), 0.0);
        assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-9);
        assert_eq!(polygon_centroid(&[a]).unwrap(), a);
        assert!(polygon_centroid(&[]).is_err());

        let utm = geographic_to_utm(&a);
        assert!(is_valid_utm(&utm));
        assert!(is_valid_geographic(&utm_to_geographic(&utm)));
    }
}
