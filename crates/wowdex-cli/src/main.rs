//! wowdex CLI - local lookup for WoW guide, route, and raid links
//!
//! This is the main entry point for the wowdex command-line interface.
//! Command implementations live in separate modules under `commands`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wowdex_core::{Config, MappingSources};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = initialize_logging(&cli) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        },
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Commands::Completions { shell } = &cli.command {
        commands::completions::execute(*shell);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let sources = resolve_sources(&cli, &config);
    let limit = config.search.max_suggestions;

    match cli.command {
        Commands::Guide { class, spec } => commands::guide::execute(&sources, limit, &class, &spec),
        Commands::Mplus { source, item } => {
            commands::mplus::execute(&sources, limit, source, &item)
        },
        Commands::Raid { boss } => commands::raid::execute(&sources, limit, &boss),
        Commands::Search {
            category,
            query,
            class,
            output,
        } => commands::search::execute(
            &sources,
            limit,
            category,
            query.as_deref().unwrap_or(""),
            class.as_deref(),
            output,
        ),
        Commands::Detect { text } => commands::detect::execute(&sources, limit, &text),
        Commands::Stats { output } => commands::stats::execute(&sources, limit, output),
        Commands::Check => commands::check::execute(&sources, limit),
        Commands::Completions { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load()?),
    }
}

/// The `--mappings` flag (or env) overrides the configured directory.
fn resolve_sources(cli: &Cli, config: &Config) -> MappingSources {
    cli.mappings
        .as_deref()
        .map_or_else(|| config.sources(), MappingSources::from_dir)
}
