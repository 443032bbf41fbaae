//! Error types for interchange operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur while reading or writing Ariane files.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// The input file does not exist.
    #[error("File not found: `{}`", path.display())]
    NotFound { path: PathBuf },

    /// The file extension is not a known Ariane format.
    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    /// The format is known but cannot perform the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// ZIP archive error (for TML).
    #[error("Archive error: {0}")]
    Archive(String),

    /// XML parsing or serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree does not fit the survey model.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    /// True when the container or its XML payload could not be parsed.
    pub fn is_malformed_container(&self) -> bool {
        matches!(self, Self::Archive(_) | Self::Xml(_))
    }
}
