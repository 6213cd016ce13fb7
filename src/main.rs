//! placemark CLI entry point
//!
//! Place name lookup - CLI + web API

use placemark::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
