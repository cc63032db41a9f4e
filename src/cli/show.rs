//! Show command handler.
//!
//! Implements the `show` subcommand: print one technique as a card, looked
//! up by id or (fuzzy) name.

use super::{load_page_checked, terminal_render_config};
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::render::render_card_text;
use anyhow::Result;

/// Number of names offered when nothing matches.
const MAX_SUGGESTIONS: usize = 3;

/// Run the show command
pub fn run_show(config: &AppConfig, key: &str, quiet: bool) -> Result<i32> {
    let Some(page) = load_page_checked(config)? else {
        return Ok(exit_codes::VALIDATION_FAILED);
    };

    let Some(found) = page.catalog.lookup(key) else {
        eprintln!("No technique matches '{key}'");
        let suggestions = page.catalog.suggestions(key, MAX_SUGGESTIONS);
        if !suggestions.is_empty() && key.trim().parse::<u32>().is_err() {
            eprintln!("Did you mean: {}?", suggestions.join(", "));
        }
        return Ok(exit_codes::VALIDATION_FAILED);
    };

    if !found.exact && !quiet {
        eprintln!(
            "Showing closest match '{}' ({:.0}% similar)",
            found.record.name,
            found.score * 100.0
        );
    }

    let target = OutputTarget::Stdout;
    let render_config = terminal_render_config(config, target.is_terminal());
    write_output(&render_card_text(found.record, &render_config), &target, quiet)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_by_id_and_name() {
        let config = AppConfig::default();
        assert_eq!(run_show(&config, "2", true).unwrap(), exit_codes::SUCCESS);
        assert_eq!(
            run_show(&config, "few-shot", true).unwrap(),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_show_missing() {
        let config = AppConfig::default();
        assert_eq!(
            run_show(&config, "42", true).unwrap(),
            exit_codes::VALIDATION_FAILED
        );
        assert_eq!(
            run_show(&config, "zzzzzzzzzzzzzzzzzzzzzzzzzz", true).unwrap(),
            exit_codes::VALIDATION_FAILED
        );
    }
}
