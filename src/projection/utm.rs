//! Transverse Mercator series for UTM
//!
//! Closed-form series in the style of Snyder's "Map Projections: A Working
//! Manual". Accurate to well under a meter within ±3° of the central
//! meridian, which covers any point inside its own zone.

use crate::projection::ellipsoid::Ellipsoid;
use crate::types::{Hemisphere, UtmZone};

/// Scale factor on the central meridian
pub const SCALE_FACTOR: f64 = 0.9996;

/// False easting applied to every zone, in meters
pub const FALSE_EASTING: f64 = 500_000.0;

/// Inverse projection: zone-relative easting/northing to latitude/longitude in degrees
pub fn inverse(easting: f64, northing: f64, zone: UtmZone, ellipsoid: &Ellipsoid) -> (f64, f64) {
    let x = easting - FALSE_EASTING;
    let y = match zone.hemisphere() {
        Hemisphere::North => northing,
        Hemisphere::South => northing - Hemisphere::South.false_northing(),
    };

    let a = ellipsoid.semi_major_axis;
    let ep2 = ellipsoid.second_eccentricity_squared();
    let e1 = ellipsoid.footpoint_parameter();

    let arc = y / SCALE_FACTOR;
    let mu = arc / (a * ellipsoid.rectifying_factor());

    let footpoint = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

    let cos_fp = footpoint.cos();
    let tan_fp = footpoint.tan();
    let c1 = ep2 * cos_fp * cos_fp;
    let t1 = tan_fp * tan_fp;
    let n1 = ellipsoid.prime_vertical_radius(footpoint);
    let r1 = ellipsoid.meridional_radius(footpoint);
    let d = x / (n1 * SCALE_FACTOR);

    let lat = footpoint
        - (n1 * tan_fp / r1)
            * (d.powi(2) / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);

    let lon_offset = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d.powi(5)
            / 120.0)
        / cos_fp;

    (lat.to_degrees(), zone.central_meridian() + lon_offset.to_degrees())
}

/// Forward projection: latitude/longitude in degrees to unrounded easting/northing in `zone`
pub fn forward(latitude: f64, longitude: f64, zone: UtmZone, ellipsoid: &Ellipsoid) -> (f64, f64) {
    let lat = latitude.to_radians();
    let lon = longitude.to_radians();
    let lon0 = zone.central_meridian().to_radians();

    let ep2 = ellipsoid.second_eccentricity_squared();
    let n = ellipsoid.prime_vertical_radius(lat);
    let tan_lat = lat.tan();
    let t = tan_lat * tan_lat;
    let c = ep2 * lat.cos().powi(2);
    let a = lat.cos() * (lon - lon0);
    let m = ellipsoid.meridional_arc(lat);

    let easting = SCALE_FACTOR
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
        + FALSE_EASTING;

    let northing = SCALE_FACTOR
        * (m + n
            * tan_lat
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));

    (easting, northing + zone.hemisphere().false_northing())
}
