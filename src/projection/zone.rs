//! Lenient zone designator resolution
//!
//! Zone strings come from OCR output. Besides the generic `<digits><N|S>`
//! form, the Dominican Republic zones are often written with their latitude
//! band letter ("19Q", "20Q"). Anything else resolves to the configured
//! operating zone, and the resolution says so.

use tracing::warn;

use crate::types::{Hemisphere, UtmZone};

/// Outcome of resolving a zone string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneResolution {
    /// Zone used for the conversion
    pub zone: UtmZone,
    /// True when the input was unreadable and the operating zone was substituted
    pub fallback: bool,
}

/// Zones whose band letter `Q` is read as northern hemisphere
pub const BAND_Q_ZONES: [u8; 2] = [19, 20];

/// Hemisphere implied by the designator letter of zone `number`
fn hemisphere_for_letter(number: u8, letter: char) -> Option<Hemisphere> {
    match letter {
        'N' => Some(Hemisphere::North),
        'S' => Some(Hemisphere::South),
        'Q' if BAND_Q_ZONES.contains(&number) => Some(Hemisphere::North),
        _ => None,
    }
}

/// Parses `<1-2 digits><N|S>`, or `19Q`/`20Q`
pub fn parse_lenient(zone: &str) -> Option<UtmZone> {
    let upper = zone.trim().to_ascii_uppercase();
    let mut chars = upper.chars();
    let letter = chars.next_back()?;
    let digits = chars.as_str();

    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number: u8 = digits.parse().ok()?;
    let hemisphere = hemisphere_for_letter(number, letter)?;
    UtmZone::new(number, hemisphere).ok()
}

/// Resolves a zone string, substituting `operating_zone` when it cannot be read
pub fn resolve_zone(zone: &str, operating_zone: UtmZone) -> ZoneResolution {
    match parse_lenient(zone) {
        Some(zone) => ZoneResolution { zone, fallback: false },
        None => {
            warn!(input = zone, fallback = %operating_zone, "unreadable UTM zone, using operating zone");
            ZoneResolution {
                zone: operating_zone,
                fallback: true,
            }
        }
    }
}
