//! Error types for the kokbul library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`KokbulError`] enum.
//!
//! # Examples
//!
//! ```
//! use kokbul::error::{KokbulError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KokbulError::invalid_config("unknown aggregation strategy"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for kokbul operations.
///
/// Ordinary "word could not be stemmed" outcomes are not errors; the
/// stem-selection code represents them as `None`. This enum only covers
/// configuration misuse and collaborator failures that must surface to the
/// caller.
#[derive(Error, Debug)]
pub enum KokbulError {
    /// I/O errors (file operations, pipes to the external analyzer, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Morphological-lookup collaborator errors
    #[error("Morphology error: {0}")]
    Morphology(String),

    /// Configuration errors (bad aggregation name, missing lookup source, etc.)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KokbulError.
pub type Result<T> = std::result::Result<T, KokbulError>;

impl KokbulError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KokbulError::Analysis(msg.into())
    }

    /// Create a new morphology error.
    pub fn morphology<S: Into<String>>(msg: S) -> Self {
        KokbulError::Morphology(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        KokbulError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KokbulError::Other(msg.into())
    }
}
