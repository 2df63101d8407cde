use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored account document.
///
/// `access_groups` holds both bare entries (`admin`, `editor`) and
/// collection-scoped entries (`curator@nccp`). Credential fields stay on
/// this type and never leave the service; responses use [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub access_groups: Vec<String>,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Project to the response shape, dropping credential fields.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            organization: self.organization.clone(),
            access_groups: self.access_groups.clone(),
        }
    }
}

/// Account shape safe to return to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub access_groups: Vec<String>,
}
