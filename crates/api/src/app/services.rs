use std::sync::Arc;

use curio_accounts::roles::CollectionRoleService;
use curio_accounts::store::UserStore;

/// Shared service handles injected into every handler via `Extension`.
///
/// The account store arrives as a trait object so the binary can wire
/// the production store while tests hand in a seeded in-memory one.
pub struct AppServices {
    roles: CollectionRoleService<Arc<dyn UserStore>>,
}

impl AppServices {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            roles: CollectionRoleService::new(store),
        }
    }

    pub fn roles(&self) -> &CollectionRoleService<Arc<dyn UserStore>> {
        &self.roles
    }
}
