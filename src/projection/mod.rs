//! UTM <-> WGS84 projection

pub mod coordinate;
pub mod ellipsoid;
pub mod transformer;
pub mod utm;
pub mod zone;

#[cfg(feature = "proj")]
pub mod reference;

pub use coordinate::{GeographicCoordinate, PolygonPoint, UtmCoordinate};
pub use ellipsoid::Ellipsoid;
pub use transformer::{Transformer, UtmConversion};
pub use zone::{resolve_zone, ZoneResolution};

#[cfg(feature = "proj")]
pub use reference::ProjReference;
