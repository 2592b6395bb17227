use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reference ellipsoid used by the Transverse Mercator series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub semi_major_axis: f64,
    /// First eccentricity squared
    pub eccentricity_squared: f64,
}

impl Ellipsoid {
    /// WGS84 as used by GPS, with e² rounded to eight places
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        eccentricity_squared: 0.00669438,
    };

    /// Creates an ellipsoid, rejecting non-physical parameters
    pub fn new(semi_major_axis: f64, eccentricity_squared: f64) -> Result<Self> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(Error::Config(format!("semi-major axis must be positive, got {}", semi_major_axis)));
        }
        if !(0.0..1.0).contains(&eccentricity_squared) {
            return Err(Error::Config(format!(
                "eccentricity squared must be in [0, 1), got {}",
                eccentricity_squared
            )));
        }
        Ok(Self {
            semi_major_axis,
            eccentricity_squared,
        })
    }

    /// Second eccentricity squared, e'² = e² / (1 - e²)
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared / (1.0 - self.eccentricity_squared)
    }

    /// Series parameter e1 = (1 - √(1-e²)) / (1 + √(1-e²)), used for the footpoint latitude
    pub fn footpoint_parameter(&self) -> f64 {
        let root = (1.0 - self.eccentricity_squared).sqrt();
        (1.0 - root) / (1.0 + root)
    }

    /// Leading coefficient of the meridional arc series
    pub fn rectifying_factor(&self) -> f64 {
        let e2 = self.eccentricity_squared;
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0
    }

    /// Meridional arc length from the equator to `lat` (radians), in meters
    pub fn meridional_arc(&self, lat: f64) -> f64 {
        let e2 = self.eccentricity_squared;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        self.semi_major_axis
            * (self.rectifying_factor() * lat
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * lat).sin())
    }

    /// Radius of curvature in the prime vertical at `lat` (radians)
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.semi_major_axis / (1.0 - self.eccentricity_squared * lat.sin().powi(2)).sqrt()
    }

    /// Radius of curvature in the meridian at `lat` (radians)
    pub fn meridional_radius(&self, lat: f64) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity_squared)
            / (1.0 - self.eccentricity_squared * lat.sin().powi(2)).powf(1.5)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_derived_values() {
        let wgs84 = Ellipsoid::WGS84;
        assert!((wgs84.second_eccentricity_squared() - 0.006739497).abs() < 1e-8);
        assert!((wgs84.footpoint_parameter() - 0.001679220).abs() < 1e-8);
    }

    #[test]
    fn test_meridional_arc() {
        let wgs84 = Ellipsoid::WGS84;
        assert_eq!(wgs84.meridional_arc(0.0), 0.0);
        // Equator to pole is about 10,001,965.7 m on WGS84
        let quarter = wgs84.meridional_arc(std::f64::consts::FRAC_PI_2);
        assert!((quarter - 10_001_965.7).abs() < 1.0);
    }

    #[test]
    fn test_radii_at_equator() {
        let wgs84 = Ellipsoid::WGS84;
        assert!((wgs84.prime_vertical_radius(0.0) - 6_378_137.0).abs() < 1e-6);
        assert!(wgs84.meridional_radius(0.0) < wgs84.prime_vertical_radius(0.0));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(Ellipsoid::new(-1.0, 0.006).is_err());
        assert!(Ellipsoid::new(6_378_137.0, 1.0).is_err());
        assert!(Ellipsoid::new(6_378_137.0, 0.00669438).is_ok());
    }
}
