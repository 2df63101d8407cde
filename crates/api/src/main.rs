use std::sync::Arc;

use curio_api::config::ApiConfig;

#[tokio::main]
async fn main() {
    curio_observability::init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = Arc::new(curio_infra::InMemoryUserStore::new());
    let app = curio_api::app::build_app(config.jwt_secret, store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
