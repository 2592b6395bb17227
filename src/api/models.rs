use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::projection::GeographicCoordinate;

#[derive(Debug, Serialize, Deserialize)]
pub struct UtmQuery {
    pub easting: f64,
    pub northing: f64,
    /// Missing zones resolve to the operating zone
    #[serde(default)]
    pub zone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeographicResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Zone as the caller sent it, for display
    pub input_zone: Option<String>,
    /// Zone actually used for the conversion
    pub zone: String,
    pub zone_fallback: bool,
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeographicQuery {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UtmResponse {
    pub easting: f64,
    pub northing: f64,
    pub zone: String,
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceQuery {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub meters: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CentroidRequest {
    pub points: Vec<GeographicCoordinate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CentroidResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub bounds: Option<BoundingBox>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
