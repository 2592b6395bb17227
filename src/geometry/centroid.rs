//! Planar polygon centroid
//!
//! Latitude and longitude are treated as flat Cartesian coordinates
//! (longitude as x, latitude as y). That is a fair approximation for
//! footprints a few kilometers across, and increasingly wrong past a few
//! tens of kilometers or near the poles. This is not a geodesic centroid.

use crate::error::{Error, Result};
use crate::projection::PolygonPoint;

/// Area, relative to the squared extent of the ring, below which it has no area
const DEGENERATE_AREA_RATIO: f64 = 1e-10;

/// Area-weighted centroid of a polygon ring using the shoelace formula
///
/// The ring is closed implicitly (last vertex connects to the first). A
/// single vertex is returned unchanged. Rings with no area (two vertices,
/// collinear vertices) fall back to the mean of their vertices.
///
/// # Errors
/// Returns [`Error::InvalidInput`] for an empty ring.
pub fn planar_centroid(points: &[PolygonPoint]) -> Result<PolygonPoint> {
    let first = match points {
        [] => return Err(Error::InvalidInput("polygon has no vertices".to_string())),
        [only] => return Ok(*only),
        [first, ..] => *first,
    };

    // Shift to the first vertex so the cross terms stay small
    let origin_x = first.longitude;
    let origin_y = first.latitude;

    let mut twice_area = 0.0;
    let mut span: f64 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        let (xi, yi) = (p.longitude - origin_x, p.latitude - origin_y);
        let (xj, yj) = (q.longitude - origin_x, q.latitude - origin_y);

        let cross = xi * yj - xj * yi;
        twice_area += cross;
        span = span.max(xi.abs()).max(yi.abs());
        cx += (xi + xj) * cross;
        cy += (yi + yj) * cross;
    }

    if twice_area.abs() <= span * span * DEGENERATE_AREA_RATIO {
        return Ok(vertex_mean(points));
    }

    let area = twice_area / 2.0;
    Ok(PolygonPoint::new(
        origin_y + cy / (6.0 * area),
        origin_x + cx / (6.0 * area),
    ))
}

fn vertex_mean(points: &[PolygonPoint]) -> PolygonPoint {
    let n = points.len() as f64;
    let (lat, lon) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
    PolygonPoint::new(lat / n, lon / n)
}

/// Signed planar area of the ring in square degrees (positive when counter-clockwise)
pub fn planar_signed_area(points: &[PolygonPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let origin = points[0];
    let twice_area: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| {
            let (xi, yi) = (p.longitude - origin.longitude, p.latitude - origin.latitude);
            let (xj, yj) = (q.longitude - origin.longitude, q.latitude - origin.latitude);
            xi * yj - xj * yi
        })
        .sum();

    twice_area / 2.0
}
