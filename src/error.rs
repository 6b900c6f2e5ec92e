//! Error types for racketbook
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ServiceError;
use crate::domain::policies::ValidationError;
use crate::domain::ports::StoreError;

/// Result type alias for racketbook operations
pub type RacketbookResult<T> = Result<T, RacketbookError>;

/// Main error type for racketbook operations
#[derive(Error, Debug)]
pub enum RacketbookError {
    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationError> for RacketbookError {
    fn from(err: ValidationError) -> Self {
        RacketbookError::Service(ServiceError::Validation(err))
    }
}

impl RacketbookError {
    /// Process exit code for this error: 2 for invalid input, 3 for a
    /// missing record, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            RacketbookError::Service(ServiceError::Validation(_))
            | RacketbookError::Service(ServiceError::InvalidSelection { .. }) => 2,
            RacketbookError::Service(ServiceError::Store(StoreError::NotFound { .. }))
            | RacketbookError::Store(StoreError::NotFound { .. }) => 3,
            _ => 1,
        }
    }
}
