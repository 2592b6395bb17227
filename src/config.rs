//! Engine and server configuration
//!
//! Both configs deserialize from JSON with every field optional, and can be
//! overridden from the environment.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::projection::Ellipsoid;
use crate::types::UtmZone;

/// Environment variable naming the operating zone
pub const DEFAULT_ZONE_ENV: &str = "UTMKIT_DEFAULT_ZONE";

/// Environment variable for the API bind host
pub const HOST_ENV: &str = "UTMKIT_HOST";

/// Environment variable for the API bind port
pub const PORT_ENV: &str = "UTMKIT_PORT";

/// Configuration of the coordinate engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Zone assumed when a zone string is missing or unreadable
    #[serde(default)]
    pub default_zone: UtmZone,
    #[serde(default)]
    pub ellipsoid: Ellipsoid,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_zone: UtmZone::default(),
            ellipsoid: Ellipsoid::WGS84,
        }
    }
}

impl EngineConfig {
    /// Builds a config with an explicit operating zone
    pub fn with_default_zone(default_zone: UtmZone) -> Self {
        Self {
            default_zone,
            ..Self::default()
        }
    }

    /// Loads overrides from the environment on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Applies environment overrides to this config
    pub fn apply_env(self) -> Result<Self> {
        match env::var(DEFAULT_ZONE_ENV) {
            Ok(value) => Ok(Self {
                default_zone: parse_zone_setting(&value)?,
                ..self
            }),
            Err(_) => Ok(self),
        }
    }

    /// Reads a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects an ellipsoid the series cannot work with
    pub fn validate(&self) -> Result<()> {
        Ellipsoid::new(self.ellipsoid.semi_major_axis, self.ellipsoid.eccentricity_squared).map(|_| ())
    }
}

fn parse_zone_setting(value: &str) -> Result<UtmZone> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{} must look like 19N or 20S, got '{}'", DEFAULT_ZONE_ENV, value)))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024
}

/// Configuration of the HTTP API server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Body limit for CSV uploads
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Loads the server config from the environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var(HOST_ENV) {
            config.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            config.port = port
                .parse()
                .map_err(|_| Error::Config(format!("{} must be a port number, got '{}'", PORT_ENV, port)))?;
        }
        config.engine = config.engine.apply_env()?;

        Ok(config)
    }

    /// Reads a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
