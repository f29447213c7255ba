//! Unified error types for the pixedit workspace.
//!
//! Decoding and validation failures are the two error families of the
//! editing core; the remaining variants belong to the surrounding plumbing
//! (files, configuration, image codec, command line).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PixeditError {
    /// A terminal input sequence could not be decoded.
    #[error("decode error: {message}")]
    Decode {
        /// Description of the malformed input.
        message: String,
    },

    /// A value was outside its permitted range.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the rejected value.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Reading or writing an image file failed.
    #[error("image error: {message}")]
    Image {
        /// Description of the codec failure.
        message: String,
    },

    /// An editor command was malformed or could not be executed.
    #[error("{message}")]
    Command {
        /// Message shown to the user.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl PixeditError {
    /// Builds a [`PixeditError::Decode`] from any displayable message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Builds a [`PixeditError::Validation`] from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Builds a [`PixeditError::Command`] from any displayable message.
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PixeditError>;
