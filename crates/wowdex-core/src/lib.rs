//! # wowdex-core
//!
//! Core functionality for wowdex - a local lookup engine for World of Warcraft
//! guide, Mythic+ route, and raid boss links.
//!
//! This crate turns loosely-structured YAML mapping files into validated,
//! immutable in-memory indexes and answers exact and partial-text lookups over
//! them. It is deliberately small and synchronous: there is no network I/O and
//! no persistence beyond reading the mapping files at startup.
//!
//! ## Architecture
//!
//! - **Loading**: [`load_mappings`] reads each mapping file, validates its
//!   shape, and collects per-file and per-entry [`Diagnostic`]s instead of
//!   failing the whole load.
//! - **Indexing**: [`LookupIndex`] consumes the loaded [`MappingSet`] and
//!   serves exact lookups and ranked autocomplete-style searches.
//! - **Reload**: [`SharedIndex`] publishes a rebuilt index with a single
//!   atomic swap so concurrent readers never observe a half-built index.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wowdex_core::{load_mappings, LookupIndex, MappingSources};
//!
//! let sources = MappingSources::from_dir(Path::new("mappings"));
//! let (set, diagnostics) = load_mappings(&sources);
//! for diagnostic in &diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//!
//! let index = LookupIndex::build(set);
//! if let Some(entry) = index.guide("Paladin", "Protection") {
//!     println!("wowhead: {:?}", entry.wowhead_url);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Bad mapping data never produces an [`Error`]: the loader returns the
//! best-effort [`MappingSet`] together with the full diagnostic list, and
//! lookups return `None` or an empty list for misses. [`Error`] is reserved
//! for infrastructure failures such as an unreadable config file.

/// Optional TOML configuration for paths and search limits
pub mod config;
/// Structured load-time problem reports
pub mod diagnostics;
/// Error types and result aliases
pub mod error;
/// Exact-match and ranked partial-match lookups
pub mod index;
/// Mapping file loading and validation
pub mod loader;
/// Key and query text normalization
pub mod normalize;
/// Atomically swappable index for reloads
pub mod reload;
/// Core data types and structures
pub mod types;

pub use config::{Config, PathsConfig, SearchConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::{Error, Result};
pub use index::{LookupIndex, DEFAULT_SUGGESTION_LIMIT};
pub use loader::{load_mappings, MappingSources};
pub use normalize::normalize_key;
pub use reload::SharedIndex;
pub use types::{
    AuxEntry, BossEntry, Category, ClassGuideEntry, MappingSet, RouteEntry, Suggestion,
};
