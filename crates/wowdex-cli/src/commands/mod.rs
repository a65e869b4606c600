//! Command implementations for the wowdex CLI.

pub mod check;
pub mod completions;
pub mod detect;
pub mod guide;
pub mod mplus;
pub mod raid;
pub mod search;
pub mod stats;

use tracing::warn;
use wowdex_core::{load_mappings, Diagnostic, LookupIndex, MappingSources};

/// Load the mapping files and build the index every lookup command reads.
///
/// Diagnostics are logged here so each command only deals with the built
/// index; `check` is the one command that inspects them directly.
pub(crate) fn build_index(
    sources: &MappingSources,
    limit: usize,
) -> (LookupIndex, Vec<Diagnostic>) {
    let (set, diagnostics) = load_mappings(sources);
    for diagnostic in &diagnostics {
        warn!("{diagnostic}");
    }
    (LookupIndex::with_limit(set, limit), diagnostics)
}
