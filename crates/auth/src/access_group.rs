//! Access-group string grammar.
//!
//! An access group is either a bare global role (`admin`, `editor`) or a
//! collection-scoped composite `<role>@<collection>` (`curator@nccp`).
//! Composites split on the *first* `@`. Collection names never contain
//! `@`; a stored entry whose collection segment does is corrupt data,
//! not a user decision.

use curio_core::{ServiceError, ServiceResult};

pub const ADMIN: &str = "admin";
pub const EDITOR: &str = "editor";
pub const CURATOR: &str = "curator";
pub const REVIEWER: &str = "reviewer";

/// A parsed collection-scoped access group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedRole {
    role: String,
    collection: String,
}

impl ScopedRole {
    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl core::fmt::Display for ScopedRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.role, self.collection)
    }
}

/// Format a collection-scoped access group as stored and compared
/// everywhere: `role@collection`.
pub fn format_scoped(role: &str, collection: &str) -> String {
    format!("{role}@{collection}")
}

/// Split a composite entry on its first `@`. Bare global roles return
/// `None`.
pub fn split_scoped(entry: &str) -> Option<(&str, &str)> {
    entry.split_once('@')
}

/// The collection a composite entry is scoped to, if any.
pub fn collection_of(entry: &str) -> Option<&str> {
    split_scoped(entry).map(|(_, collection)| collection)
}

/// Parse a stored entry that must be a well-formed `role@collection`.
///
/// Failure here is a data-integrity fault (`Internal`): scoped entries
/// are written by this service and collection names never contain `@`.
pub fn parse_scoped(entry: &str) -> ServiceResult<ScopedRole> {
    let Some((role, collection)) = split_scoped(entry) else {
        return Err(ServiceError::internal(format!(
            "malformed access group '{entry}': missing '@' separator"
        )));
    };

    if collection.contains('@') {
        return Err(ServiceError::internal(format!(
            "malformed access group '{entry}': collection segment contains '@'"
        )));
    }

    Ok(ScopedRole {
        role: role.to_string(),
        collection: collection.to_string(),
    })
}
