use std::net::SocketAddr;

use anyhow::Context;

/// Process configuration, read from the environment exactly once at
/// startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// `CURIO_BIND_ADDR` defaults to `0.0.0.0:8080`. `CURIO_JWT_SECRET`
    /// falls back to an insecure dev default with a warning.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("CURIO_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .context("CURIO_BIND_ADDR must be a host:port address")?;

        let jwt_secret = std::env::var("CURIO_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("CURIO_JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Ok(Self {
            bind_addr,
            jwt_secret,
        })
    }
}
