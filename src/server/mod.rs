//! HTTP server for placemark
//!
//! Exposes one search session over a REST API so that a browser or any
//! other client can act as the search screen.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::get_backend;
use crate::search;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server on the configured address
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();
    run_on(&addr, config).await
}

/// Start the HTTP server with a specific address
pub async fn run_on(addr: &str, config: Config) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    let backend = Arc::new(get_backend(&config.service)?);
    let session = search::spawn(Arc::clone(&backend), backend, config.display.labels()?);

    let state = Arc::new(AppState::new(config, session));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
