//! Error types for the profanity library.
//!
//! All fallible operations return [`ProfanityError`] through the crate-wide
//! [`Result`] alias. Matching itself never fails: [`Matcher::find`] and
//! [`Matcher::matches`] are total functions, so errors only surface while
//! loading dictionaries, validating configuration or building matchers.
//!
//! # Examples
//!
//! ```
//! use profanity::error::{ProfanityError, Result};
//!
//! fn pick_threshold(value: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(ProfanityError::invalid_argument("threshold out of range"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(pick_threshold(0.8).is_ok());
//! assert!(pick_threshold(1.5).is_err());
//! ```
//!
//! [`Matcher::find`]: crate::matcher::Matcher::find
//! [`Matcher::matches`]: crate::matcher::Matcher::matches

use std::io;

use thiserror::Error;

/// The main error type for profanity operations.
#[derive(Error, Debug)]
pub enum ProfanityError {
    /// The dictionary resource could not be read (including invalid UTF-8).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary line could not be parsed into a term.
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// An argument was rejected, e.g. a threshold outside `[0.0, 1.0]`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ProfanityError.
pub type Result<T> = std::result::Result<T, ProfanityError>;

impl ProfanityError {
    /// Create a new format error for the given 1-based line number.
    pub fn format<S: Into<String>>(line: usize, msg: S) -> Self {
        ProfanityError::Format {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ProfanityError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProfanityError::Config(msg.into())
    }

    /// Create a not-found I/O error, used when a dictionary resource is missing.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ProfanityError::Io(io::Error::new(io::ErrorKind::NotFound, msg.into()))
    }
}
