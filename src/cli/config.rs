//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "display.labels")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => show_all_config(&config),

        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{}", value),
            None => return Err(unknown_key(key)),
        },

        (Some(key), Some(value)) => {
            if config.get(key).is_none() {
                return Err(unknown_key(key));
            }
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

/// Error listing the keys that do exist
fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {}\n\nAvailable keys:\n  {}",
        key,
        Config::available_keys().join("\n  ")
    ))
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[service]");
    println!("base_url = \"{}\"", config.service.base_url);
    println!("user_agent = \"{}\"", config.service.user_agent);
    println!("suggestion_limit = {}", config.service.suggestion_limit);
    println!("result_filter = \"{}\"", config.service.result_filter);
    if config.service.language.is_empty() {
        println!("language = \"\" # provider default");
    } else {
        println!("language = \"{}\"", config.service.language);
    }
    println!("min_interval_ms = {}", config.service.min_interval_ms);
    println!();

    println!("[display]");
    println!("labels = \"{}\"", config.display.labels);
    println!("format = \"{}\"", config.display.format);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
}
