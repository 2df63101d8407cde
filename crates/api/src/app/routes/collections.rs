//! Collection-role endpoints: grant, change, and revoke roles, plus the
//! gated membership listings.
//!
//! Handlers stay thin. Parameter presence, authorization, and membership
//! rules all live in the role service; this file only shapes requests
//! and responses.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use curio_accounts::roles::RoleMutation;

use crate::app::{errors, services::AppServices};
use crate::context::RequesterContext;

// ─────────────────────────────────────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────────────────────────────────────

/// Body for role grants and changes.
///
/// Fields default to empty strings so that absent values reach the
/// service's own parameter validation instead of being rejected by the
/// JSON extractor with an unnamed 422.
#[derive(Debug, Deserialize)]
pub struct RoleChangeBody {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub role: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

pub fn router() -> Router {
    Router::new()
        .route("/:collection/roles", post(assign_role).patch(edit_role))
        .route("/:collection/roles/:user_id", delete(remove_role))
        .route("/:collection/reviewers", get(list_reviewers))
        .route("/:collection/curators", get(list_curators))
        .route("/:collection/members", get(list_members))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /collections/:collection/roles - grant a role to an account
pub async fn assign_role(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Path(collection): Path<String>,
    Json(body): Json<RoleChangeBody>,
) -> axum::response::Response {
    match services
        .roles()
        .modify_collection_role(
            RoleMutation::Assign,
            requester.claims(),
            &collection,
            &body.user_id,
            &body.role,
        )
        .await
    {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

/// PATCH /collections/:collection/roles - change an existing member's role
pub async fn edit_role(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Path(collection): Path<String>,
    Json(body): Json<RoleChangeBody>,
) -> axum::response::Response {
    match services
        .roles()
        .modify_collection_role(
            RoleMutation::Edit,
            requester.claims(),
            &collection,
            &body.user_id,
            &body.role,
        )
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

/// DELETE /collections/:collection/roles/:user_id - revoke a member's role
pub async fn remove_role(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Path((collection, user_id)): Path<(String, String)>,
) -> axum::response::Response {
    match services
        .roles()
        .remove_collection_role(requester.claims(), &collection, &user_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

/// GET /collections/:collection/reviewers - admins and the collection's curators
pub async fn list_reviewers(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Path(collection): Path<String>,
) -> axum::response::Response {
    match services
        .roles()
        .fetch_reviewers(requester.claims(), &collection)
        .await
    {
        Ok(users) => (StatusCode::OK, Json(serde_json::json!({ "users": users }))).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

/// GET /collections/:collection/curators - admin only
pub async fn list_curators(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Path(collection): Path<String>,
) -> axum::response::Response {
    match services
        .roles()
        .fetch_curators(requester.claims(), &collection)
        .await
    {
        Ok(users) => (StatusCode::OK, Json(serde_json::json!({ "users": users }))).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

/// GET /collections/:collection/members - admin only
pub async fn list_members(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Path(collection): Path<String>,
) -> axum::response::Response {
    match services
        .roles()
        .fetch_collection_members(requester.claims(), &collection)
        .await
    {
        Ok(users) => (StatusCode::OK, Json(serde_json::json!({ "users": users }))).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}
