//! Error types for the batch converter.
//!
//! One variant per failure class of a batch run. Every variant aborts the
//! batch; nothing is recovered locally.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use serde::Serialize;

/// Main error type for the converter.
#[derive(Error, Debug, Serialize)]
pub enum ConverterError {
    /// The input directory could not be listed
    #[error("Cannot read directory {path}: {message}")]
    Directory { path: PathBuf, message: String },

    /// A matched file could not be opened or decoded as an image
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// libwebp refused to encode the decoded image
    #[error("WebP encode failed for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The output file could not be written
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Encoder settings out of range
    #[error("Settings error: {0}")]
    Settings(String),

    /// The blocking conversion task died before returning
    #[error("Processing error: {0}")]
    Processing(String),
}

/// Convenience result type for converter operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

impl ConverterError {
    pub fn directory(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Directory {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn decode(path: impl AsRef<Path>, err: impl ToString) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn encode(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    pub fn write(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn settings<T: Into<String>>(msg: T) -> Self {
        Self::Settings(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    /// Path of the file or directory the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Directory { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::Settings(_) | Self::Processing(_) => None,
        }
    }
}
