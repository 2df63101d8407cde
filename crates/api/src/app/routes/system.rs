use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::RequesterContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(requester): Extension<RequesterContext>) -> impl IntoResponse {
    let claims = requester.claims();
    Json(serde_json::json!({
        "id": claims.sub,
        "username": claims.username,
        "email": claims.email,
        "organization": claims.organization,
        "accessGroups": claims.access_groups,
    }))
}
