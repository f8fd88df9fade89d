//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// uniqueness conflicts, missing rows). The non-fatal audit-write failure is
/// deliberately not part of this enum; it never propagates to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing required input. Never reaches the store.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness constraint would be violated (e.g. duplicate SKU).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The operation targets a nonexistent or already-soft-deleted row.
    #[error("not found")]
    NotFound,

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The store rejected an operation the pre-checks missed (e.g. a race
    /// past a uniqueness check). Surfaced to callers as a conflict.
    #[error("integrity violation: {0}")]
    Integrity(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }
}
