//! `curio-auth` — pure authorization policy for the account service.
//!
//! Everything in this crate is a deterministic function over request
//! claims and stored access groups. There is no IO, no clock, and no
//! logging here; callers own side effects. The crate is organized as:
//!
//! - [`claims`]: the decoded token shape and its role predicates
//! - [`access_group`]: the `role@collection` entry grammar
//! - [`authorize`]: the any-match accept/deny gate
//! - [`membership`]: collection membership and role-management rules

pub mod access_group;
pub mod authorize;
pub mod claims;
pub mod membership;

pub use access_group::ScopedRole;
pub use authorize::{authorize_request, INVALID_ACCESS};
pub use claims::Claims;
pub use membership::{
    has_role_modification_access, is_collection_member, verify_read_reviewer_access,
};
