//! Classify command - encode a remote service version

use console::style;
use serde::Serialize;
use tfop_core::{CoreError, classify};

use crate::error::{CliError, Result};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyReport<'a> {
    version: &'a str,
    encoded: i64,
    format: String,
    modern: bool,
}

/// Run the classify command
pub fn run(version: &str, output_json: bool) -> Result<()> {
    let classified = classify(version).map_err(|e| {
        if matches!(e, CoreError::MalformedVersion { .. }) {
            CliError::input_with_help(
                e.to_string(),
                "expected vYYYYMM-N (e.g. v202409-1) or MAJOR.MINOR.PATCH (e.g. 1.2.3)",
            )
        } else {
            CliError::internal(e.to_string())
        }
    })?;

    let report = ClassifyReport {
        version,
        encoded: classified.encoded,
        format: classified.format().to_string(),
        modern: classified.uses_modern_behavior(),
    };

    if output_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let behavior = if report.modern {
        style("modern").green()
    } else {
        style("legacy").yellow()
    };

    println!("{:<10} {}", style("VERSION").bold(), report.version);
    println!("{:<10} {}", style("FORMAT").bold(), report.format);
    println!("{:<10} {}", style("ENCODED").bold(), report.encoded);
    println!("{:<10} {}", style("BEHAVIOR").bold(), behavior);

    Ok(())
}
