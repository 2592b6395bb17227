//! Planar and spherical measurements on geographic coordinates

pub mod bounds;
pub mod centroid;
pub mod distance;

pub use bounds::BoundingBox;
pub use centroid::{planar_centroid, planar_signed_area};
pub use distance::{haversine_distance, EARTH_RADIUS_M};
