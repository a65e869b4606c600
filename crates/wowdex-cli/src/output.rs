//! Output format selection shared by listing commands.

use clap::ValueEnum;
use serde::Serialize;

/// How a listing command renders its results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// Machine-readable JSON
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Print a slice of serializable rows in `json` or `jsonl` form.
pub fn print_machine<T: Serialize>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Jsonl => {
            for row in rows {
                println!("{}", serde_json::to_string(row)?);
            }
        },
        OutputFormat::Text => {},
    }
    Ok(())
}
