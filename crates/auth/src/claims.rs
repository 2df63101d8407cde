//! Bearer-token claims model (transport-agnostic).
//!
//! This is the set of claims the service expects once a token has been
//! decoded/verified by whatever transport layer is in use. Signature
//! verification and token issuance are intentionally outside this crate.

use serde::{Deserialize, Deserializer, Serialize};

use crate::access_group::{self, ADMIN, CURATOR, EDITOR, REVIEWER};

/// The authenticated caller's claims.
///
/// # Invariants
/// - An absent or malformed `accessGroups` claim decodes to an empty
///   list, never an error: a token without readable groups simply holds
///   no privileges.
/// - Every privilege predicate is total and never panics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Claims {
    /// Subject: the requester's user id.
    pub sub: String,

    pub username: String,

    pub email: String,

    pub organization: Option<String>,

    /// Granted access groups (`admin`, `curator@nccp`, ...). Insertion
    /// order carries no meaning.
    #[serde(deserialize_with = "lenient_access_groups")]
    pub access_groups: Vec<String>,

    /// Expiry as seconds since the epoch; enforced by the transport
    /// decoder, carried here so tokens round-trip.
    pub exp: i64,
}

impl Claims {
    /// True iff the caller holds the global `admin` group.
    pub fn is_admin(&self) -> bool {
        self.holds(ADMIN)
    }

    /// True iff the caller holds the global `editor` group.
    pub fn is_editor(&self) -> bool {
        self.holds(EDITOR)
    }

    pub fn is_admin_or_editor(&self) -> bool {
        self.is_admin() || self.is_editor()
    }

    /// True iff the caller is a curator of exactly `collection`.
    pub fn has_curator_role(&self, collection: &str) -> bool {
        self.holds(&access_group::format_scoped(CURATOR, collection))
    }

    /// True iff the caller is a reviewer of exactly `collection`.
    pub fn has_reviewer_role(&self, collection: &str) -> bool {
        self.holds(&access_group::format_scoped(REVIEWER, collection))
    }

    fn holds(&self, group: &str) -> bool {
        self.access_groups.iter().any(|g| g == group)
    }
}

/// Decode `accessGroups` leniently: anything that is not an array of
/// strings (missing, null, wrong type, non-string elements) contributes
/// no groups.
fn lenient_access_groups<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let Some(serde_json::Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}
