//! Account profile and administrative search endpoints.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::app::{errors, services::AppServices};
use crate::context::RequesterContext;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring matched against name and email; empty lists everyone.
    #[serde(default)]
    pub q: String,
}

pub fn router() -> Router {
    Router::new().route("/me", get(me))
}

pub fn admin_router() -> Router {
    Router::new().route("/users", get(search))
}

/// GET /users/me - public profile of the authenticated account
pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
) -> axum::response::Response {
    match services.roles().find_public_user(requester.user_id()).await {
        Ok(user) => (StatusCode::OK, Json(serde_json::json!({ "user": user }))).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

/// GET /admin/users?q=<query> - admin-only account search
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(requester): Extension<RequesterContext>,
    Query(query): Query<SearchQuery>,
) -> axum::response::Response {
    match services
        .roles()
        .search_users(requester.claims(), &query.q)
        .await
    {
        Ok(users) => (StatusCode::OK, Json(serde_json::json!({ "users": users }))).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}
