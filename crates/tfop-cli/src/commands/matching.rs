//! Match command - filter names with a wildcard pattern

use tfop_core::match_wildcard_name;

use crate::error::{CliError, Result};

/// Run the match command, printing every matching name
pub fn run(pattern: &str, names: &[String]) -> Result<()> {
    let matched: Vec<&String> = names
        .iter()
        .filter(|name| match_wildcard_name(pattern, name))
        .collect();

    tracing::debug!(pattern, total = names.len(), matched = matched.len(), "matched names");

    if matched.is_empty() {
        return Err(CliError::NoMatch {
            pattern: pattern.to_string(),
        });
    }

    for name in matched {
        println!("{}", name);
    }

    Ok(())
}
