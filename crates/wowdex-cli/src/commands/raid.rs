//! Raid command implementation.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use wowdex_core::MappingSources;

/// Look up the guide link for one raid boss.
pub fn execute(sources: &MappingSources, limit: usize, boss: &str) -> Result<ExitCode> {
    let (index, _) = super::build_index(sources, limit);

    let Some(entry) = index.boss(boss) else {
        println!("Boss '{boss}' not found.");
        return Ok(ExitCode::FAILURE);
    };

    println!("{} {}", "Raid Boss:".bold(), entry.display_name.red());
    println!("  {} {}", "Guide Link:".bright_black(), entry.url);
    Ok(ExitCode::SUCCESS)
}
