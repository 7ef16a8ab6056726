//! Binary entrypoint for the shop HTTP server.
//!
//! Listens on the fixed address from [`ServerConfig::default`] and keeps its
//! collections in the working directory. Log verbosity follows `RUST_LOG`
//! (default `info`).

use shop_server::config::ServerConfig;
use shop_server::router::build_router;
use shop_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::default();
    let state = AppState::new(&config)?;
    let app = build_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("shop server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
