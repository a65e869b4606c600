//! CLI structure and argument parsing.
//!
//! The command surface mirrors the lookups the index serves: `guide`,
//! `mplus` and `raid` answer one lookup each, `search` exposes the ranked
//! autocomplete matching, `detect` scans free text for known keywords, and
//! `stats`/`check` cover startup reporting.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use wowdex_core::Category;

use crate::output::OutputFormat;

/// Main CLI structure for the `wowdex` command.
#[derive(Parser, Debug)]
#[command(name = "wowdex")]
#[command(version)]
#[command(about = "wowdex - local lookup for WoW guide, route, and raid links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the mapping files. Also via `WOWDEX_MAPPINGS`.
    #[arg(long, global = true, value_name = "DIR", env = "WOWDEX_MAPPINGS")]
    pub mappings: Option<PathBuf>,

    /// Path to configuration file. Also via `WOWDEX_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "WOWDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Show debug-level load details
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands for the `wowdex` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the guide links for a class and spec
    Guide {
        /// Class name (case-insensitive)
        class: String,
        /// Specialization name (case-insensitive)
        spec: String,
    },

    /// Show a Mythic+ route or an auxiliary murloc entry
    Mplus {
        /// Which table to look in
        #[arg(long, value_enum, default_value_t = MplusSource::Routes)]
        source: MplusSource,
        /// Dungeon slug or entry key
        item: String,
    },

    /// Show the guide link for a raid boss
    Raid {
        /// Boss slug or name
        boss: String,
    },

    /// Ranked partial-text search over one category
    Search {
        /// Category to search
        #[arg(value_enum)]
        category: CategoryArg,
        /// Partial text; empty shows the first entries alphabetically
        query: Option<String>,
        /// Restrict class-guides search to one class's specs
        #[arg(long)]
        class: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Scan free text for known dungeon, boss, and murloc keywords
    Detect {
        /// The message text to scan
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show entry counts per category
    Stats {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Load the mapping files and report all diagnostics
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Table selector for the `mplus` command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MplusSource {
    /// Mythic+ route links
    Routes,
    /// Auxiliary murloc entries
    Murloc,
}

/// Category selector for the `search` command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    /// Class names (or one class's specs with `--class`)
    ClassGuides,
    /// Mythic+ dungeons
    Routes,
    /// Auxiliary murloc entries
    Auxiliary,
    /// Raid bosses
    RaidBosses,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::ClassGuides => Self::ClassGuides,
            CategoryArg::Routes => Self::Routes,
            CategoryArg::Auxiliary => Self::Auxiliary,
            CategoryArg::RaidBosses => Self::RaidBosses,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_lookup_commands() {
        let cli = Cli::try_parse_from(["wowdex", "guide", "paladin", "protection"]).unwrap();
        assert!(matches!(cli.command, Commands::Guide { .. }));

        let cli = Cli::try_parse_from(["wowdex", "mplus", "--source", "murloc", "tanks"]).unwrap();
        match cli.command {
            Commands::Mplus { source, item } => {
                assert_eq!(source, MplusSource::Murloc);
                assert_eq!(item, "tanks");
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_mplus_defaults_to_routes() {
        let cli = Cli::try_parse_from(["wowdex", "mplus", "hoa"]).unwrap();
        match cli.command {
            Commands::Mplus { source, .. } => assert_eq!(source, MplusSource::Routes),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_accepts_category_and_filter() {
        let cli = Cli::try_parse_from([
            "wowdex",
            "search",
            "class-guides",
            "pro",
            "--class",
            "paladin",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                category,
                query,
                class,
                ..
            } => {
                assert_eq!(category, CategoryArg::ClassGuides);
                assert_eq!(query.as_deref(), Some("pro"));
                assert_eq!(class.as_deref(), Some("paladin"));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_mappings_flag_is_global() {
        let cli =
            Cli::try_parse_from(["wowdex", "stats", "--mappings", "/tmp/mappings"]).unwrap();
        assert_eq!(cli.mappings.as_deref(), Some(std::path::Path::new("/tmp/mappings")));
    }
}
