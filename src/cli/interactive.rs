//! Interactive command handler
//!
//! A line-oriented search screen. Each line typed replaces the search
//! field; suggestions or the resolved address are redrawn whenever the
//! session state changes.

use crate::cli::suggest::render_suggestions;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::LabelSet;
use crate::geo::get_backend;
use crate::search::{self, LookupStatus, SearchState};
use clap::Args;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive command arguments
#[derive(Args)]
pub struct InteractiveArgs {
    /// Detail labels: en or ja
    #[arg(long, short = 'l')]
    pub labels: Option<String>,

    /// Result filter: poi, address or all
    #[arg(long)]
    pub filter: Option<String>,
}

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// New contents of the search field
    Query(String),
    /// Pick the suggestion with this 1-based number
    Select(usize),
    /// Look up the field as typed
    Search,
    Help,
    Quit,
    /// Unrecognized command
    Unknown(String),
}

/// Parse one line; commands start with ':' so any other text is a query
pub fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return Input::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit"), None) => Input::Quit,
        (Some("h" | "help"), None) => Input::Help,
        (Some("s" | "search"), None) => Input::Search,
        (Some("clear"), None) => Input::Query(String::new()),
        (Some("select"), Some(n)) => parse_selection(n).unwrap_or_else(|| Input::Unknown(line.to_string())),
        (Some(n), None) => parse_selection(n).unwrap_or_else(|| Input::Unknown(line.to_string())),
        _ => Input::Unknown(line.to_string()),
    }
}

fn parse_selection(n: &str) -> Option<Input> {
    match n.parse::<usize>() {
        Ok(number) if number > 0 => Some(Input::Select(number)),
        _ => None,
    }
}

/// Render the screen body for a state
///
/// Suggestions take precedence over the address detail, matching what a
/// user sees while still typing.
pub fn render(state: &SearchState) -> String {
    if !state.suggestions.is_empty() {
        return render_suggestions(&state.suggestions);
    }

    match &state.status {
        LookupStatus::Pending => format!("Looking up '{}'...\n", state.query),
        LookupStatus::NotFound => format!("No match for '{}'\n", state.query),
        LookupStatus::Failed(message) => format!("Lookup failed: {}\n", message),
        LookupStatus::Idle | LookupStatus::Found => match &state.address_detail {
            Some(detail) => format!("{}\n", detail.text),
            None => String::new(),
        },
    }
}

/// Run the interactive command
pub async fn run(args: InteractiveArgs) -> Result<()> {
    super::init_logging("warn");

    let mut config = Config::load()?;
    if let Some(filter) = &args.filter {
        config.set("service.result_filter", filter)?;
    }
    let labels = match &args.labels {
        Some(labels) => LabelSet::from_str(labels).map_err(Error::Config)?,
        None => config.display.labels()?,
    };

    let backend = Arc::new(get_backend(&config.service)?);
    let session = search::spawn(Arc::clone(&backend), backend, labels);
    let mut updates = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();
    prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Query(text) => session.set_query(text)?,
                    Input::Select(number) => match session.suggestion(number - 1) {
                        Some(suggestion) => session.select(suggestion)?,
                        None => println!("No suggestion {}", number),
                    },
                    Input::Search => session.search()?,
                    Input::Help => print_help(),
                    Input::Quit => break,
                    Input::Unknown(text) => println!("Unknown command: {} (:help for commands)", text),
                }
                prompt()?;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                println!();
                print!("{}", render(&state));
                prompt()?;
            }
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!("Type a place name to see suggestions.");
    println!("  :N, :select N  look up suggestion N");
    println!("  :search        look up the text as typed");
    println!("  :clear         clear the search field");
    println!("  :quit          exit");
}
