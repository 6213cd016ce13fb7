//! Lookup command handler
//!
//! Geocodes a place name and prints its address.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, LabelSet};
use crate::geo::{get_backend, Geocoder};
use clap::Args;
use std::str::FromStr;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// Place name to geocode
    #[arg(required_unless_present = "list_formats")]
    pub place: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Detail labels: en or ja
    #[arg(long, short = 'l')]
    pub labels: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the lookup command
pub async fn run(args: LookupArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let place = args
        .place
        .ok_or_else(|| Error::Config("No place name given".to_string()))?;

    super::init_logging("warn");

    let config = Config::load()?;

    let format = args.format.unwrap_or(config.display.format.clone());
    let labels = match &args.labels {
        Some(labels) => LabelSet::from_str(labels).map_err(Error::Config)?,
        None => config.display.labels()?,
    };
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let backend = get_backend(&config.service)?;
    let placemark = match backend.geocode(&place).await? {
        Some(placemark) => placemark,
        None => {
            eprintln!("Error: Could not geocode '{}'", place);
            std::process::exit(1);
        }
    };

    let output = formatter.format(&placemark, labels)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
