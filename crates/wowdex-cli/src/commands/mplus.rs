//! Mplus command implementation: routes or murloc entries, selected by
//! source.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use wowdex_core::MappingSources;

use crate::cli::MplusSource;

/// Look up a Mythic+ route or an auxiliary murloc entry.
pub fn execute(
    sources: &MappingSources,
    limit: usize,
    source: MplusSource,
    item: &str,
) -> Result<ExitCode> {
    let (index, _) = super::build_index(sources, limit);

    match source {
        MplusSource::Routes => {
            let Some(entry) = index.route(item) else {
                println!("Dungeon '{item}' not found.");
                return Ok(ExitCode::FAILURE);
            };
            println!("{} {}", "M+ Route:".bold(), entry.display_name.green());
            println!("  {} {}", "Route Link:".bright_black(), entry.url);
        },
        MplusSource::Murloc => {
            let Some(entry) = index.aux_entry(item) else {
                println!("Entry '{item}' not found.");
                return Ok(ExitCode::FAILURE);
            };
            println!("{} {}", "Murloc:".bold(), entry.display_name.green());
            for line in entry.url_or_text.lines() {
                println!("  {line}");
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}
