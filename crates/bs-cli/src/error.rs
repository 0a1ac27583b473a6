//! Error types for the command line driver

use std::io;

use thiserror::Error;

/// Process exit code for a completed run, found or not.
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code for any validation or allocation failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that stop a run before a result is reported
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid array size. Must be a positive integer.")]
    InvalidSize,

    #[error("Invalid input for element {index}.")]
    InvalidElement { index: usize },

    #[error("Invalid target value.")]
    InvalidTarget,

    #[error("Memory allocation failed.")]
    AllocationFailed { size: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DriverError {
    /// Exit code the binary terminates with for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidSize
            | Self::InvalidElement { .. }
            | Self::InvalidTarget
            | Self::AllocationFailed { .. }
            | Self::Io(_)
            | Self::SerializationError(_) => EXIT_FAILURE,
        }
    }
}
