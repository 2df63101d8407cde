//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: service wiring (role service over the account store)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: error kind → status mapping and error responses
//!
//! Authorization semantics never live here; handlers delegate to the
//! role service and translate its results.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use curio_accounts::store::UserStore;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and
/// the black-box tests, which inject a seeded store).
pub fn build_app(jwt_secret: String, store: Arc<dyn UserStore>) -> Router {
    let decoder: Arc<dyn middleware::TokenDecoder> =
        Arc::new(middleware::Hs256TokenDecoder::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { decoder };

    let app_services = Arc::new(services::AppServices::new(store));

    // Protected routes: require a decoded bearer token.
    let protected = routes::router()
        .layer(Extension(app_services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_middleware)))
}
