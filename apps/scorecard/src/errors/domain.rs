//! Domain-level error type returned by scorecard mutations.
//!
//! A rejected mutation always leaves the session untouched, so callers that
//! only care about the resulting state may ignore these errors. The binary
//! converts them into `crate::error::AppError` via the provided `From` impl.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Why an entered value was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Negative, or larger than the round's trick count.
    OutOfRange,
    /// Not an integer.
    Malformed,
}

/// Entities a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Round,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(ValidationKind, String),
    /// Missing entity in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(ValidationKind::OutOfRange, _) => ErrorCode::ValueOutOfRange,
            DomainError::Validation(ValidationKind::Malformed, _) => ErrorCode::MalformedValue,
            DomainError::NotFound(NotFoundKind::Round, _) => ErrorCode::RoundNotFound,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::NotFound(_, d) => d,
        }
    }
}
