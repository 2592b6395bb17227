//! Error types for utmkit

use std::fmt;
use std::io;

/// Result type for utmkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in utmkit operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Input the engine cannot work with (empty polygon, malformed zone)
    InvalidInput(String),

    /// Coordinate outside its valid envelope
    OutOfRange(String),

    /// Invalid configuration value
    Config(String),

    /// CSV read/write error
    Csv(csv::Error),

    /// JSON error
    Json(serde_json::Error),

    /// Projection backend error
    Projection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Projection(msg) => write!(f, "Projection error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl Error {
    /// Returns true for errors caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::OutOfRange(_))
    }
}
