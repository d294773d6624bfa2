/*!
 * Error types for the asstxt application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a single subtitle file
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// None of the candidate encodings could decode the file
    #[error("Unable to decode {path:?} with any supported encoding")]
    Decode {
        /// File that failed to decode
        path: PathBuf,
    },

    /// The file could not be read (missing, permissions, ...)
    #[error("Failed to read {path:?}: {message}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// The output file could not be written
    #[error("Failed to write {path:?}: {message}")]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
}

impl SubtitleError {
    /// Whether this error is a decode failure rather than an I/O failure
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The target directory holds no subtitle files
    #[error("No input files found: {0}")]
    NoInputFiles(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
