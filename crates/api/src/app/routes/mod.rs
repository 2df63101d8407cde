use axum::{routing::get, Router};

pub mod collections;
pub mod system;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/users", users::router())
        .nest("/admin", users::admin_router())
        .nest("/collections", collections::router())
}
