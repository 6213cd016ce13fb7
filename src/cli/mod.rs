//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod interactive;
pub mod lookup;
pub mod serve;
pub mod suggest;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Place name autocomplete and geocoding lookup
#[derive(Parser)]
#[command(name = "placemark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search interactively: type to get suggestions, pick one to see its address
    Interactive(interactive::InteractiveArgs),

    /// Print suggestions for a partial place name
    Suggest(suggest::SuggestArgs),

    /// Geocode a place name and print its address
    Lookup(lookup::LookupArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Interactive(args) => interactive::run(args).await,
        Commands::Suggest(args) => suggest::run(args).await,
        Commands::Lookup(args) => lookup::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Log to stderr, honoring RUST_LOG when set
fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
