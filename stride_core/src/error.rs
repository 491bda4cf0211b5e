//! Error types for the stride_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Package carried an activity code outside SWM/RUN/WLK
    #[error("Invalid workout type: {0}")]
    InvalidActivityType(String),

    /// Package field count does not match the activity's constructor
    #[error("Invalid field count for {code}: expected {expected}, found {found}")]
    FieldCount {
        code: String,
        expected: usize,
        found: usize,
    },

    /// A count field was not a non-negative whole number
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
