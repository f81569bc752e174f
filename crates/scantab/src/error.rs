//! Error types for scantab.
//!
//! All fallible operations in the crate return [`Result`]. The reformatting
//! core itself never fails (malformed lines are dropped, and a document that
//! parses too poorly falls back to the original text), so errors here come
//! from the surrounding surfaces: configuration loading, validation, and the
//! OCR engine seam.
//!
//! System errors bubble up unchanged: `ScantabError::Io` wraps
//! `std::io::Error` directly and is never re-wrapped with another variant.
use thiserror::Error;

/// Result type alias using [`ScantabError`].
pub type Result<T> = std::result::Result<T, ScantabError>;

/// Main error type for all scantab operations.
#[derive(Debug, Error)]
pub enum ScantabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Recognition was requested before the engine handle reached the
    /// `Ready` state. Non-recoverable from inside the crate: the caller
    /// must finish (or retry) engine initialization first.
    #[error("OCR engine not ready: {0}")]
    EngineNotReady(String),
}

impl ScantabError {
    /// Create a `Validation` error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a `Validation` error with source.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an `Ocr` error.
    pub fn ocr<S: Into<String>>(message: S) -> Self {
        Self::Ocr {
            message: message.into(),
            source: None,
        }
    }

    /// Create an `Ocr` error with source.
    pub fn ocr_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Ocr {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
