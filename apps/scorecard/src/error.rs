use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

/// Errors surfaced by the terminal front end.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected: {detail}")]
    Rejected { code: ErrorCode, detail: String },
    #[error("Bad command: {detail}")]
    BadCommand { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Rejected { code, .. } => *code,
            AppError::BadCommand { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    pub fn bad_command(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadCommand {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Errors the interactive loop reports and then keeps reading.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Rejected { .. } | AppError::BadCommand { .. })
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::Rejected {
            code: e.code(),
            detail: e.detail().to_string(),
        }
    }
}
