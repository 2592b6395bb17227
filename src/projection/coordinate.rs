use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeographicCoordinate {
    /// Creates a coordinate from latitude/longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate from longitude/latitude in degrees (x, y order)
    pub fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lat, lon)
    }
}

/// Vertex of a polygon ring
pub type PolygonPoint = GeographicCoordinate;

/// A projected UTM position
///
/// The zone is kept as the caller supplied it so it can be displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtmCoordinate {
    pub easting: f64,
    pub northing: f64,
    pub zone: String,
}

impl UtmCoordinate {
    /// Creates a UTM coordinate
    pub fn new(easting: f64, northing: f64, zone: impl Into<String>) -> Self {
        Self {
            easting,
            northing,
            zone: zone.into(),
        }
    }
}
