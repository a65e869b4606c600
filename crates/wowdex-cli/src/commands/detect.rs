//! Detect command implementation: scan free text for known keywords.
//!
//! Tokenization and phrase building live here, not in the index - the index
//! only answers exact lookups for the token phrases this command produces.
//! Single tokens and adjacent pairs are checked against the routes, murloc,
//! and raid tables; matched entries print once each.

use std::collections::HashSet;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use wowdex_core::{normalize_key, MappingSources};

/// Scan a message for known dungeon, boss, and murloc keywords.
pub fn execute(sources: &MappingSources, limit: usize, text: &[String]) -> Result<ExitCode> {
    let (index, _) = super::build_index(sources, limit);

    let message = text.join(" ");
    let mut seen: HashSet<(&str, String)> = HashSet::new();
    let mut hits = 0usize;

    for phrase in phrases(&message) {
        if let Some(entry) = index.route(&phrase) {
            if seen.insert(("route", phrase.clone())) {
                hits += 1;
                println!("{} {} - {}", "M+ Route:".green(), entry.display_name, entry.url);
            }
        }
        if let Some(entry) = index.boss(&phrase) {
            if seen.insert(("boss", phrase.clone())) {
                hits += 1;
                println!("{} {} - {}", "Raid Boss:".red(), entry.display_name, entry.url);
            }
        }
        if let Some(entry) = index.aux_entry(&phrase) {
            if seen.insert(("aux", phrase.clone())) {
                hits += 1;
                println!(
                    "{} {} - {}",
                    "Murloc:".cyan(),
                    entry.display_name,
                    entry.url_or_text.lines().next().unwrap_or_default()
                );
            }
        }
    }

    if hits == 0 {
        println!("No known keywords found.");
    }
    Ok(ExitCode::SUCCESS)
}

/// Candidate lookup phrases: every token and every adjacent token pair, in
/// normalized form with punctuation trimmed off token edges.
fn phrases(message: &str) -> Vec<String> {
    let normalized = normalize_key(message);
    let tokens: Vec<&str> = normalized
        .split(' ')
        .map(|token| token.trim_matches(|ch: char| !ch.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect();

    let mut phrases: Vec<String> = Vec::with_capacity(tokens.len() * 2);
    for window in tokens.windows(2) {
        phrases.push(window.join(" "));
    }
    for token in tokens {
        phrases.push(token.to_string());
    }
    phrases
}
