//! Error types for disastersafe.
//!
//! The controller never reports errors for navigation or theme changes. This
//! type covers the surfaces around it: the preference file, configuration,
//! and template rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::style::StyleValidationError;

/// The main error type for disastersafe operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The preference file could not be read or written.
    #[error("preference file {path}: {source}")]
    StoreIo {
        /// Path to the preference file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The preference file does not contain a JSON object of strings.
    #[error("preference file {path} is malformed: {source}")]
    StoreFormat {
        /// Path to the preference file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Rendering Errors ===
    /// A palette has a dangling or cyclic alias.
    #[error("invalid palette: {0}")]
    Palette(#[from] StyleValidationError),

    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
