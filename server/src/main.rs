mod config;
mod routes;

use std::io;

use config::{ConfigError, ServerConfig};

/// Startup failures.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: io::Error },

    #[error("server failed: {0}")]
    Serve(io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "floatchat server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app(&config).map_err(ServerError::Leptos)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, public_dir = %config.public_dir.display(), "floatchat listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
