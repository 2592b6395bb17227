//! Range checks for coordinates
//!
//! The predicates never reject anything themselves; conversions do not
//! consult them. Callers choose whether out-of-range input is an error
//! (`ensure_*`) or just a flag (`is_valid_*`).

use crate::error::{Error, Result};
use crate::projection::{GeographicCoordinate, UtmCoordinate};
use crate::types::UtmZone;

/// Smallest easting accepted as valid
pub const MIN_EASTING: f64 = 160_000.0;

/// Largest easting accepted as valid
pub const MAX_EASTING: f64 = 840_000.0;

/// Smallest northing accepted as valid
pub const MIN_NORTHING: f64 = 0.0;

/// Largest northing accepted as valid
pub const MAX_NORTHING: f64 = 10_000_000.0;

/// True when the zone is `<1-2 digits><N|S>` in 1-60 and easting/northing are in range
pub fn is_valid_utm(utm: &UtmCoordinate) -> bool {
    ensure_valid_utm(utm).is_ok()
}

/// True when latitude is in [-90, 90] and longitude in [-180, 180]
pub fn is_valid_geographic(geographic: &GeographicCoordinate) -> bool {
    ensure_valid_geographic(geographic).is_ok()
}

/// Checks a UTM coordinate, naming the first field out of range
pub fn ensure_valid_utm(utm: &UtmCoordinate) -> Result<()> {
    utm.zone
        .parse::<UtmZone>()
        .map_err(|_| Error::OutOfRange(format!("zone '{}' is not <1-60><N|S>", utm.zone)))?;

    if !(MIN_EASTING..=MAX_EASTING).contains(&utm.easting) {
        return Err(Error::OutOfRange(format!(
            "easting {} outside [{}, {}]",
            utm.easting, MIN_EASTING, MAX_EASTING
        )));
    }

    if !(MIN_NORTHING..=MAX_NORTHING).contains(&utm.northing) {
        return Err(Error::OutOfRange(format!(
            "northing {} outside [{}, {}]",
            utm.northing, MIN_NORTHING, MAX_NORTHING
        )));
    }

    Ok(())
}

/// Checks a geographic coordinate, naming the first field out of range
pub fn ensure_valid_geographic(geographic: &GeographicCoordinate) -> Result<()> {
    if !(-90.0..=90.0).contains(&geographic.latitude) {
        return Err(Error::OutOfRange(format!("latitude {} outside [-90, 90]", geographic.latitude)));
    }

    if !(-180.0..=180.0).contains(&geographic.longitude) {
        return Err(Error::OutOfRange(format!("longitude {} outside [-180, 180]", geographic.longitude)));
    }

    Ok(())
}
