//! Collection-role workflows.
//!
//! One service owns every role mutation and read against the account
//! store. Assign and Edit share a single preflight (validate, authorize,
//! load, format) and differ only in the membership precondition and the
//! store instruction they issue; Remove derives the role to authorize
//! from the stored entry instead of taking one as input.
//!
//! The membership check and the mutation are separate store calls with
//! no lock between them. Two concurrent requests for the same user and
//! collection can both pass the check; the store applies whichever
//! instructions arrive.

use curio_auth::claims::Claims;
use curio_auth::{
    access_group, authorize_request, has_role_modification_access, is_collection_member,
    verify_read_reviewer_access,
};
use curio_core::{ServiceError, ServiceResult};

use crate::store::UserStore;
use crate::users::{PublicUser, UserRecord};

/// Mutation kinds dispatched through the shared workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleMutation {
    Assign,
    Edit,
}

/// Collection-role mutations and reads over an account store.
#[derive(Debug, Clone)]
pub struct CollectionRoleService<S> {
    store: S,
}

impl<S> CollectionRoleService<S>
where
    S: UserStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Assign or edit a collection role on the target user.
    ///
    /// Preflight order is fixed: parameter validation first (a caller
    /// with no privileges still learns which parameters were missing),
    /// then the grant-rule gate, then the target-user load. Exactly one
    /// store mutation is issued on success; none on any failure.
    pub async fn modify_collection_role(
        &self,
        kind: RoleMutation,
        requester: &Claims,
        collection: &str,
        user_id: &str,
        role: &str,
    ) -> ServiceResult<()> {
        require_params(&[
            ("user_id", user_id),
            ("role", role),
            ("collection", collection),
        ])?;

        let allowed = has_role_modification_access(role, requester, collection);
        authorize_request(&[allowed], None)?;

        let user = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("user {user_id} not found")))?;

        let group = access_group::format_scoped(role, collection);
        let member = is_collection_member(collection, &user.access_groups);

        match kind {
            RoleMutation::Assign => {
                if member {
                    return Err(ServiceError::bad_request(format!(
                        "{} is already a member of the {} collection",
                        user.name, collection
                    )));
                }
                self.store.assign_access_group(user_id, &group).await?;
            }
            RoleMutation::Edit => {
                if !member {
                    return Err(ServiceError::bad_request(format!(
                        "{} is not a member of the {} collection",
                        user.name, collection
                    )));
                }
                self.store
                    .edit_access_group(user_id, &group, collection)
                    .await?;
            }
        }

        Ok(())
    }

    /// Remove the target user's role entry for a collection.
    ///
    /// The role to authorize against is parsed from the stored entry, so
    /// the lookup happens before the gate: a missing entry is NotFound
    /// even for a requester who could not have removed it.
    pub async fn remove_collection_role(
        &self,
        requester: &Claims,
        collection: &str,
        user_id: &str,
    ) -> ServiceResult<()> {
        require_params(&[("user_id", user_id), ("collection", collection)])?;

        let entry = self
            .store
            .fetch_user_collection_role(user_id, collection)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!(
                    "user {user_id} has no role in the {collection} collection"
                ))
            })?;

        let scoped = access_group::parse_scoped(&entry)?;
        let allowed = has_role_modification_access(scoped.role(), requester, collection);
        authorize_request(&[allowed], None)?;

        self.store.remove_access_group(user_id, &entry).await?;
        Ok(())
    }

    /// Reviewers of a collection, readable by admins and that
    /// collection's curators.
    pub async fn fetch_reviewers(
        &self,
        requester: &Claims,
        collection: &str,
    ) -> ServiceResult<Vec<PublicUser>> {
        let allowed = verify_read_reviewer_access(requester, collection);
        authorize_request(&[allowed], None)?;

        let users = self.store.fetch_reviewers(collection).await?;
        Ok(project(&users))
    }

    /// Curators of a collection, admin only.
    pub async fn fetch_curators(
        &self,
        requester: &Claims,
        collection: &str,
    ) -> ServiceResult<Vec<PublicUser>> {
        authorize_request(&[requester.is_admin()], None)?;

        let users = self.store.fetch_curators(collection).await?;
        Ok(project(&users))
    }

    /// Every member of a collection regardless of role, admin only.
    pub async fn fetch_collection_members(
        &self,
        requester: &Claims,
        collection: &str,
    ) -> ServiceResult<Vec<PublicUser>> {
        authorize_request(&[requester.is_admin()], None)?;

        let users = self.store.fetch_collection_members(collection).await?;
        Ok(project(&users))
    }

    /// Public profile for one account.
    pub async fn find_public_user(&self, user_id: &str) -> ServiceResult<PublicUser> {
        let user = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("user {user_id} not found")))?;
        Ok(user.public())
    }

    /// Admin-only account search over name and email.
    pub async fn search_users(
        &self,
        requester: &Claims,
        query: &str,
    ) -> ServiceResult<Vec<PublicUser>> {
        authorize_request(&[requester.is_admin()], None)?;

        let users = self.store.search_users(query).await?;
        Ok(project(&users))
    }
}

fn project(users: &[UserRecord]) -> Vec<PublicUser> {
    users.iter().map(UserRecord::public).collect()
}

/// Present means non-blank after trimming and not the literal strings
/// `"null"` or `"undefined"`, which is what an absent field arrives as
/// after stringification at the edge.
fn is_present(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != "null" && trimmed != "undefined"
}

fn require_params(params: &[(&str, &str)]) -> ServiceResult<()> {
    let missing: Vec<&str> = params
        .iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::bad_request(format!(
            "missing required parameters: {}",
            missing.join(", ")
        )))
    }
}
