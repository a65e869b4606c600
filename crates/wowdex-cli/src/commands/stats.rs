//! Stats command implementation.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use wowdex_core::MappingSources;

use crate::output::{print_machine, OutputFormat};

#[derive(Serialize)]
struct CategoryCount {
    category: String,
    entries: usize,
}

/// Print entry counts per category.
pub fn execute(sources: &MappingSources, limit: usize, output: OutputFormat) -> Result<ExitCode> {
    let (index, _) = super::build_index(sources, limit);

    let counts: Vec<CategoryCount> = index
        .category_counts()
        .into_iter()
        .map(|(category, entries)| CategoryCount {
            category: category.to_string(),
            entries,
        })
        .collect();

    match output {
        OutputFormat::Text => {
            for count in &counts {
                println!("{:<14} {}", count.category.cyan(), count.entries);
            }
        },
        format => print_machine(&counts, format)?,
    }

    Ok(ExitCode::SUCCESS)
}
