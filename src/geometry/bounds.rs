use serde::{Deserialize, Serialize};

use crate::projection::GeographicCoordinate;

/// Axis-aligned latitude/longitude envelope, used to frame a footprint on a map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Envelope of a set of points, `None` when empty
    pub fn from_points(points: &[GeographicCoordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let start = Self {
            min_latitude: first.latitude,
            min_longitude: first.longitude,
            max_latitude: first.latitude,
            max_longitude: first.longitude,
        };

        Some(rest.iter().fold(start, |bbox, p| Self {
            min_latitude: bbox.min_latitude.min(p.latitude),
            min_longitude: bbox.min_longitude.min(p.longitude),
            max_latitude: bbox.max_latitude.max(p.latitude),
            max_longitude: bbox.max_longitude.max(p.longitude),
        }))
    }

    /// Midpoint of the envelope
    pub fn center(&self) -> GeographicCoordinate {
        GeographicCoordinate::new(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    /// Returns true if the point lies inside or on the edge of the envelope
    pub fn contains(&self, point: &GeographicCoordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }
}
