//! `curio-accounts` — account model, datastore port, and the
//! collection-role service.
//!
//! This crate owns the workflows that decide and apply collection-role
//! changes. Policy comes from `curio-auth`; storage is reached only
//! through the [`store::UserStore`] port, so the crate itself contains
//! no IO beyond awaiting that port.

pub mod roles;
pub mod store;
pub mod users;

pub use roles::{CollectionRoleService, RoleMutation};
pub use store::{StoreError, UserStore};
pub use users::{PublicUser, UserRecord};
