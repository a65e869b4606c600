//! Check command implementation: load everything, print every diagnostic,
//! and apply the startup policy - proceed with partial data, fail only when
//! every source came up empty.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use wowdex_core::{load_mappings, LookupIndex, MappingSources, Severity};

/// Load the mapping files and report all diagnostics.
pub fn execute(sources: &MappingSources, limit: usize) -> Result<ExitCode> {
    let (set, diagnostics) = load_mappings(sources);

    let mut warnings = 0usize;
    let mut errors = 0usize;
    for diagnostic in &diagnostics {
        match diagnostic.severity {
            Severity::Warning => {
                warnings += 1;
                println!("{}", diagnostic.to_string().yellow());
            },
            Severity::Error => {
                errors += 1;
                println!("{}", diagnostic.to_string().red());
            },
        }
    }

    let index = LookupIndex::with_limit(set, limit);
    let total: usize = index
        .category_counts()
        .iter()
        .map(|(_, entries)| entries)
        .sum();
    println!(
        "{total} entries loaded, {warnings} warning(s), {errors} error(s)"
    );

    if index.is_empty() && !diagnostics.is_empty() {
        println!("{}", "All mapping sources failed to load.".red().bold());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
