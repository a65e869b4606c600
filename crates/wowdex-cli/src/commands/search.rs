//! Search command implementation: the autocomplete surface as a command.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use wowdex_core::MappingSources;

use crate::cli::CategoryArg;
use crate::output::{print_machine, OutputFormat};

/// Run a ranked partial-text search over one category.
pub fn execute(
    sources: &MappingSources,
    limit: usize,
    category: CategoryArg,
    query: &str,
    class: Option<&str>,
    output: OutputFormat,
) -> Result<ExitCode> {
    let (index, _) = super::build_index(sources, limit);
    let results = index.search(category.into(), query, class);

    match output {
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No matches.");
            }
            for suggestion in &results {
                println!(
                    "{}  {}",
                    suggestion.label,
                    format!("({})", suggestion.value).bright_black()
                );
            }
        },
        format => print_machine(&results, format)?,
    }

    Ok(ExitCode::SUCCESS)
}
