//! Service error model.
//!
//! Keep this focused on deterministic domain failures (bad input, missing
//! records, denied access). Transport mapping and logging belong to the
//! HTTP layer; storage faults are wrapped into `Internal` at the service
//! boundary.

use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error.
///
/// Each variant is a *kind* the HTTP layer maps to a status code. The
/// core raises these and nothing else; it never logs, never retries, and
/// never converts a denial into a success.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Missing/empty required input, or a semantically invalid mutation
    /// (e.g. assigning a role the target already holds).
    #[error("{0}")]
    BadRequest(String),

    /// A requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Every supplied authorization predicate was rejected.
    #[error("{0}")]
    InvalidAccess(String),

    /// Data-integrity fault (e.g. a stored access group that cannot be
    /// parsed). Not a user-facing authorization failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_access(msg: impl Into<String>) -> Self {
        Self::InvalidAccess(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
