use rayon::prelude::*;
use tracing::debug;

use crate::config::EngineConfig;
use crate::projection::coordinate::{GeographicCoordinate, UtmCoordinate};
use crate::projection::utm;
use crate::projection::zone::{resolve_zone, ZoneResolution};
use crate::types::UtmZone;

/// Result of a UTM to geographic conversion with the zone that was actually used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmConversion {
    pub coordinate: GeographicCoordinate,
    pub zone: UtmZone,
    /// True when the zone string was unreadable and the operating zone was used
    pub zone_fallback: bool,
}

/// Converts between UTM and WGS84 geographic coordinates
///
/// Holds only configuration, so a single transformer can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer {
    config: EngineConfig,
}

impl Transformer {
    /// Creates a transformer from an engine config
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine config
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves a zone string against the configured operating zone
    pub fn resolve_zone(&self, zone: &str) -> ZoneResolution {
        resolve_zone(zone, self.config.default_zone)
    }

    /// Converts a UTM coordinate to latitude/longitude
    ///
    /// Never fails: an unreadable zone falls back to the operating zone.
    pub fn utm_to_geographic(&self, utm: &UtmCoordinate) -> GeographicCoordinate {
        self.utm_to_geographic_detailed(utm).coordinate
    }

    /// Converts a UTM coordinate and reports which zone was used
    pub fn utm_to_geographic_detailed(&self, utm: &UtmCoordinate) -> UtmConversion {
        let resolution = self.resolve_zone(&utm.zone);
        let (latitude, longitude) =
            utm::inverse(utm.easting, utm.northing, resolution.zone, &self.config.ellipsoid);

        UtmConversion {
            coordinate: GeographicCoordinate::new(latitude, longitude),
            zone: resolution.zone,
            zone_fallback: resolution.fallback,
        }
    }

    /// Converts latitude/longitude to UTM in the zone containing the longitude
    ///
    /// Easting and northing are rounded to whole meters.
    pub fn geographic_to_utm(&self, geographic: &GeographicCoordinate) -> UtmCoordinate {
        let zone = UtmZone::from_lonlat(geographic.longitude, geographic.latitude);
        let (easting, northing) = self.geographic_to_utm_in_zone(geographic, zone);
        UtmCoordinate::new(easting.round(), northing.round(), zone.to_string())
    }

    /// Projects into a specific zone without rounding
    pub fn geographic_to_utm_in_zone(&self, geographic: &GeographicCoordinate, zone: UtmZone) -> (f64, f64) {
        utm::forward(geographic.latitude, geographic.longitude, zone, &self.config.ellipsoid)
    }

    /// Converts many UTM coordinates in parallel, preserving order
    pub fn utm_to_geographic_many(&self, coords: &[UtmCoordinate]) -> Vec<UtmConversion> {
        debug!(count = coords.len(), "converting UTM batch");
        coords
            .par_iter()
            .map(|coord| self.utm_to_geographic_detailed(coord))
            .collect()
    }

    /// Converts many geographic coordinates in parallel, preserving order
    pub fn geographic_to_utm_many(&self, coords: &[GeographicCoordinate]) -> Vec<UtmCoordinate> {
        debug!(count = coords.len(), "converting geographic batch");
        coords
            .par_iter()
            .map(|coord| self.geographic_to_utm(coord))
            .collect()
    }
}
