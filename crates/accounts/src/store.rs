use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use curio_core::ServiceError;

use crate::users::UserRecord;

/// Failure from the account datastore plumbing.
///
/// Only infrastructure faults live here. "User not found" and similar
/// outcomes are ordinary `Ok` results on the trait methods below.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("account store failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::internal(err.to_string())
    }
}

/// Port to the account datastore.
///
/// Mutations operate on single access-group entries and are each a
/// single instruction against the backend. None of them re-check
/// membership; callers decide first and mutate second, so a concurrent
/// writer can still slip between the two steps.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError>;

    /// The user's scoped entry for `collection`, if any.
    ///
    /// Returns `None` both when the user does not exist and when the
    /// user holds no role in the collection.
    async fn fetch_user_collection_role(
        &self,
        user_id: &str,
        collection: &str,
    ) -> Result<Option<String>, StoreError>;

    /// Append `group` to the user's access groups.
    async fn assign_access_group(&self, user_id: &str, group: &str) -> Result<(), StoreError>;

    /// Replace the user's first entry scoped to `collection` with `group`.
    async fn edit_access_group(
        &self,
        user_id: &str,
        group: &str,
        collection: &str,
    ) -> Result<(), StoreError>;

    /// Remove the exact entry `group` from the user's access groups.
    async fn remove_access_group(&self, user_id: &str, group: &str) -> Result<(), StoreError>;

    /// Users holding `reviewer@<collection>`.
    async fn fetch_reviewers(&self, collection: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Users holding `curator@<collection>`.
    async fn fetch_curators(&self, collection: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Users holding any entry scoped to `collection`.
    async fn fetch_collection_members(
        &self,
        collection: &str,
    ) -> Result<Vec<UserRecord>, StoreError>;

    /// Case-insensitive substring search over name and email.
    async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>, StoreError>;
}

#[async_trait]
impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        (**self).find_user_by_id(user_id).await
    }

    async fn fetch_user_collection_role(
        &self,
        user_id: &str,
        collection: &str,
    ) -> Result<Option<String>, StoreError> {
        (**self).fetch_user_collection_role(user_id, collection).await
    }

    async fn assign_access_group(&self, user_id: &str, group: &str) -> Result<(), StoreError> {
        (**self).assign_access_group(user_id, group).await
    }

    async fn edit_access_group(
        &self,
        user_id: &str,
        group: &str,
        collection: &str,
    ) -> Result<(), StoreError> {
        (**self).edit_access_group(user_id, group, collection).await
    }

    async fn remove_access_group(&self, user_id: &str, group: &str) -> Result<(), StoreError> {
        (**self).remove_access_group(user_id, group).await
    }

    async fn fetch_reviewers(&self, collection: &str) -> Result<Vec<UserRecord>, StoreError> {
        (**self).fetch_reviewers(collection).await
    }

    async fn fetch_curators(&self, collection: &str) -> Result<Vec<UserRecord>, StoreError> {
        (**self).fetch_curators(collection).await
    }

    async fn fetch_collection_members(
        &self,
        collection: &str,
    ) -> Result<Vec<UserRecord>, StoreError> {
        (**self).fetch_collection_members(collection).await
    }

    async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>, StoreError> {
        (**self).search_users(query).await
    }
}
