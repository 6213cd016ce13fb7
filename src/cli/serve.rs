//! Serve command handler
//!
//! Starts the HTTP server in foreground mode.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    super::init_logging("info");

    // Load and optionally override config
    let mut config = Config::load()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    info!(
        "Starting placemark server v{} on {} (geocoder: {})",
        env!("CARGO_PKG_VERSION"),
        config.server_addr(),
        config.service.base_url
    );

    server::run(config).await
}
