//! Guide command implementation.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use wowdex_core::MappingSources;

/// Look up the guide links for one class/spec pair.
pub fn execute(
    sources: &MappingSources,
    limit: usize,
    class: &str,
    spec: &str,
) -> Result<ExitCode> {
    let (index, _) = super::build_index(sources, limit);

    let Some(entry) = index.guide(class, spec) else {
        println!("No guide found for {class} {spec}.");
        return Ok(ExitCode::FAILURE);
    };

    println!(
        "{} {} {}",
        "Guides:".bold(),
        entry.class_name.cyan(),
        entry.spec_name.cyan()
    );
    if let Some(url) = &entry.wowhead_url {
        println!("  {} {url}", "Wowhead:".bright_black());
    }
    if let Some(url) = &entry.icyveins_url {
        println!("  {} {url}", "Icy Veins:".bright_black());
    }
    Ok(ExitCode::SUCCESS)
}
