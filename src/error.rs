//! Error types
//!
//! Nothing in the simulation itself is fatal. These cover the two places
//! where outside data enters the crate: settings files and tracker samples.

use std::fmt;

/// Failure to load or validate [`crate::Settings`]
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings JSON was malformed
    Parse(serde_json::Error),
    /// A value parsed but is out of range
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "failed to parse settings: {e}"),
            Self::Invalid(m) => write!(f, "invalid settings: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// A tracker sample that must not reach the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseError {
    /// A landmark coordinate was NaN or infinite
    NonFinite,
    /// The hand did not report the landmark at this index
    MissingLandmark(usize),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "pose sample has non-finite coordinates"),
            Self::MissingLandmark(i) => write!(f, "pose sample is missing landmark {i}"),
        }
    }
}

impl std::error::Error for PoseError {}
