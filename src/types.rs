//! Core data types for utmkit

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest valid UTM zone number
pub const MIN_ZONE: u8 = 1;

/// Highest valid UTM zone number
pub const MAX_ZONE: u8 = 60;

/// Hemisphere of a UTM zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// Northern hemisphere, no false northing
    North,
    /// Southern hemisphere, 10,000,000 m false northing
    South,
}

impl Hemisphere {
    /// Returns the hemisphere for a latitude in degrees (the equator counts as north)
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    /// Returns the designator letter used in zone strings
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }

    /// Returns the false northing in meters applied in this hemisphere
    pub fn false_northing(&self) -> f64 {
        match self {
            Hemisphere::North => 0.0,
            Hemisphere::South => 10_000_000.0,
        }
    }

    /// Returns the name of this hemisphere
    pub fn name(&self) -> &'static str {
        match self {
            Hemisphere::North => "North",
            Hemisphere::South => "South",
        }
    }
}

/// A UTM zone: number 1-60 plus hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtmZone {
    number: u8,
    hemisphere: Hemisphere,
}

impl UtmZone {
    /// Creates a zone, rejecting numbers outside 1-60
    pub fn new(number: u8, hemisphere: Hemisphere) -> Result<Self> {
        if !(MIN_ZONE..=MAX_ZONE).contains(&number) {
            return Err(Error::InvalidInput(format!(
                "zone number {} outside {}-{}",
                number, MIN_ZONE, MAX_ZONE
            )));
        }
        Ok(Self { number, hemisphere })
    }

    /// Zone covering a longitude in degrees, clamped to 1-60
    ///
    /// A non-finite longitude maps to zone 1.
    pub fn from_lonlat(longitude: f64, latitude: f64) -> Self {
        let raw = ((longitude + 180.0) / 6.0).floor() + 1.0;
        let number = if raw.is_finite() {
            raw.clamp(MIN_ZONE as f64, MAX_ZONE as f64) as u8
        } else {
            MIN_ZONE
        };
        Self {
            number,
            hemisphere: Hemisphere::from_latitude(latitude),
        }
    }

    /// Returns the zone number
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the hemisphere
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Longitude of the zone's central meridian in degrees
    pub fn central_meridian(&self) -> f64 {
        (self.number as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }
}

impl Default for UtmZone {
    /// Zone 19 north, covering the Dominican Republic
    fn default() -> Self {
        Self {
            number: 19,
            hemisphere: Hemisphere::North,
        }
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.hemisphere.letter())
    }
}

/// Strict parse of `<1-2 digits><N|S>`, case-insensitive
impl FromStr for UtmZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidInput(format!("invalid UTM zone '{}'", s));

        let letter_start = trimmed.char_indices().last().map(|(i, _)| i).unwrap_or(0);
        let (digits, letter) = trimmed.split_at(letter_start);
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hemisphere = match letter.to_ascii_uppercase().as_str() {
            "N" => Hemisphere::North,
            "S" => Hemisphere::South,
            _ => return Err(invalid()),
        };

        let number: u8 = digits.parse().map_err(|_| invalid())?;
        Self::new(number, hemisphere)
    }
}

impl TryFrom<String> for UtmZone {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<UtmZone> for String {
    fn from(zone: UtmZone) -> Self {
        zone.to_string()
    }
}
