//! Custom error types for alaconf.

use thiserror::Error;

/// Custom error type for alaconf operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} must be one of: {}", allowed.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} msg config failed: {cause}")]
    Dispatch {
        program: String,
        command: String,
        cause: String,
    },
}

/// Result type alias using our custom Error.
pub type Result<T> = std::result::Result<T, Error>;
