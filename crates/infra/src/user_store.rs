use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use curio_accounts::store::{StoreError, UserStore};
use curio_accounts::users::UserRecord;
use curio_auth::access_group;
use curio_auth::membership::is_collection_member;

/// In-memory account store for tests/dev.
///
/// Mutation semantics mirror the production document store: assign
/// appends, edit replaces the first entry scoped to the collection,
/// remove pulls every entry equal to the given group. A mutation
/// against an unknown user id matches nothing and is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Seed one account. Replaces any record with the same id.
    pub fn insert(&self, user: UserRecord) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user.id.clone(), user);
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(users.get(user_id).cloned())
    }

    async fn fetch_user_collection_role(
        &self,
        user_id: &str,
        collection: &str,
    ) -> Result<Option<String>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(users.get(user_id).and_then(|user| {
            user.access_groups
                .iter()
                .find(|entry| access_group::collection_of(entry) == Some(collection))
                .cloned()
        }))
    }

    async fn assign_access_group(&self, user_id: &str, group: &str) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        if let Some(user) = users.get_mut(user_id) {
            user.access_groups.push(group.to_string());
        }
        Ok(())
    }

    async fn edit_access_group(
        &self,
        user_id: &str,
        group: &str,
        collection: &str,
    ) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        if let Some(user) = users.get_mut(user_id) {
            let slot = user
                .access_groups
                .iter()
                .position(|entry| access_group::collection_of(entry) == Some(collection));
            if let Some(index) = slot {
                user.access_groups[index] = group.to_string();
            }
        }
        Ok(())
    }

    async fn remove_access_group(&self, user_id: &str, group: &str) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        if let Some(user) = users.get_mut(user_id) {
            user.access_groups.retain(|entry| entry != group);
        }
        Ok(())
    }

    async fn fetch_reviewers(&self, collection: &str) -> Result<Vec<UserRecord>, StoreError> {
        self.users_with_group(&access_group::format_scoped(access_group::REVIEWER, collection))
    }

    async fn fetch_curators(&self, collection: &str) -> Result<Vec<UserRecord>, StoreError> {
        self.users_with_group(&access_group::format_scoped(access_group::CURATOR, collection))
    }

    async fn fetch_collection_members(
        &self,
        collection: &str,
    ) -> Result<Vec<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(users
            .values()
            .filter(|user| is_collection_member(collection, &user.access_groups))
            .cloned()
            .collect())
    }

    async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>, StoreError> {
        let needle = query.to_lowercase();
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(users
            .values()
            .filter(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

impl InMemoryUserStore {
    fn users_with_group(&self, group: &str) -> Result<Vec<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(users
            .values()
            .filter(|user| user.access_groups.iter().any(|entry| entry == group))
            .cloned()
            .collect())
    }
}
