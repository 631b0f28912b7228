//! # Time-on-Air Error Handling
//!
//! This module defines the ToaError enum, which represents the different error
//! types that can occur in the lora-toa crate.

use thiserror::Error;

/// Represents the different error types that can occur in the lora-toa crate.
#[derive(Debug, Error)]
pub enum ToaError {
    /// A radio or packet parameter is outside its allowed domain.
    ///
    /// Raised before any arithmetic runs; no partial result is produced.
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// A packet description could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O failure while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToaError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ToaError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidParameter`, `None` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ToaError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Process exit code for the CLI: 2 for rejected input, 1 for anything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            ToaError::InvalidParameter { .. } => 2,
            ToaError::Config(_) | ToaError::Io(_) => 1,
        }
    }
}
