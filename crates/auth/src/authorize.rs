//! Authorization gate.
//!
//! The single chokepoint that turns a set of already-computed
//! authorization checks into an accept/deny decision. Every
//! multi-predicate permission decision in the service is finalized here;
//! nothing bypasses it.

use curio_core::{ServiceError, ServiceResult};

/// Denial message used when the caller does not supply one.
pub const INVALID_ACCESS: &str = "Invalid access";

/// Accept iff at least one case holds.
///
/// Callers compute every predicate eagerly before invoking the gate, so
/// this is a plain any-match check with no ordering requirements.
///
/// - No IO
/// - No panics
/// - No logging (denials are reported to the caller, nowhere else)
pub fn authorize_request(cases: &[bool], message: Option<&str>) -> ServiceResult<()> {
    if cases.iter().any(|case| *case) {
        Ok(())
    } else {
        Err(ServiceError::invalid_access(message.unwrap_or(INVALID_ACCESS)))
    }
}
