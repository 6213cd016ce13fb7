//! Suggest command handler
//!
//! Prints completion candidates for a partial place name.

use crate::config::Config;
use crate::error::Result;
use crate::geo::{get_backend, PlaceCompleter, Suggestion};
use clap::Args;

/// Suggest command arguments
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial place name
    pub fragment: String,

    /// Result filter: poi, address or all
    #[arg(long)]
    pub filter: Option<String>,

    /// Maximum number of suggestions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Run the suggest command
pub async fn run(args: SuggestArgs) -> Result<()> {
    super::init_logging("warn");

    let mut config = Config::load()?;
    if let Some(filter) = &args.filter {
        config.set("service.result_filter", filter)?;
    }
    if let Some(limit) = args.limit {
        config.set("service.suggestion_limit", &limit.to_string())?;
    }

    let backend = get_backend(&config.service)?;
    let suggestions = backend.complete(&args.fragment).await?;

    if suggestions.is_empty() {
        eprintln!("No suggestions for '{}'", args.fragment);
    } else {
        print!("{}", render_suggestions(&suggestions));
    }

    Ok(())
}

/// Numbered rows, subtitle indented under each title
pub(crate) fn render_suggestions(suggestions: &[Suggestion]) -> String {
    let mut output = String::new();
    for (i, suggestion) in suggestions.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, suggestion.title));
        if !suggestion.subtitle.is_empty() {
            output.push_str(&format!("     {}\n", suggestion.subtitle));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_suggestions() {
        let output = render_suggestions(&[
            Suggestion::new("Tokyo Tower", "Minato, Tokyo"),
            Suggestion::new("Tokyo Skytree", ""),
        ]);
        assert_eq!(
            output,
            "  1. Tokyo Tower\n     Minato, Tokyo\n  2. Tokyo Skytree\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_suggestions(&[]), "");
    }
}
