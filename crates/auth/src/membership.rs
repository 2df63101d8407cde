//! Collection membership and role-management policy.
//!
//! These predicates answer two questions the mutation and query flows
//! keep asking: does this user already hold *any* role in a collection,
//! and is the requester allowed to hand out a given role there. They
//! are pure functions over claims and stored access groups.

use std::collections::HashSet;

use crate::access_group::{self, CURATOR, REVIEWER};
use crate::claims::Claims;

/// Whether `access_groups` contains at least one scoped entry for
/// `collection`, regardless of role.
///
/// Bare (unscoped) entries such as `admin` never count towards
/// membership in any collection.
pub fn is_collection_member(collection: &str, access_groups: &[String]) -> bool {
    let collections: HashSet<&str> = access_groups
        .iter()
        .filter_map(|entry| access_group::collection_of(entry))
        .collect();
    collections.contains(collection)
}

/// Whether `requester` may assign, edit, or remove `role` within
/// `collection`.
///
/// The rule table is deliberately closed: roles it does not name are
/// never grantable, by anyone, including admins.
pub fn has_role_modification_access(role: &str, requester: &Claims, collection: &str) -> bool {
    match role {
        CURATOR => requester.is_admin(),
        REVIEWER => requester.is_admin() || requester.has_curator_role(collection),
        _ => false,
    }
}

/// Whether `requester` may list the reviewers of `collection`.
pub fn verify_read_reviewer_access(requester: &Claims, collection: &str) -> bool {
    requester.is_admin() || requester.has_curator_role(collection)
}
