//! End-to-end tests: write mapping files to disk, load them, and query the
//! built index the way the bot layer would.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use wowdex_core::{
    load_mappings, Category, DiagnosticKind, LookupIndex, MappingSources, Severity,
};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn full_fixture(dir: &Path) -> MappingSources {
    write(
        dir,
        "guides.yaml",
        r"
wowhead:
  paladin:
    protection: https://wowhead.example/paladin/protection
    retribution: https://wowhead.example/paladin/retribution
  druid:
    guardian: https://wowhead.example/druid/guardian
icy_veins:
  paladin:
    protection: https://icy.example/paladin/protection
",
    );
    write(
        dir,
        "mplus-routes.yaml",
        r"
dungeons:
  hoa:
    name: Halls of Atonement
    url: https://example.com/routes/hoa
  dos:
    name: Dawn of the Infinite
    url: https://example.com/routes/dos
",
    );
    write(
        dir,
        "murloc.yaml",
        r"
classes:
  tank_rankings: https://example.com/rankings/tank
  healer_picks:
    name: Healer Picks
    url: https://example.com/rankings/healer
",
    );
    write(
        dir,
        "raid.yaml",
        r"
bosses:
  ulgrax:
    name: Ulgrax the Devourer
    url: https://example.com/raid/ulgrax
",
    );
    MappingSources::from_dir(dir)
}

#[test]
fn loads_all_categories_and_answers_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let sources = full_fixture(dir.path());

    let (set, diagnostics) = load_mappings(&sources);
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");

    let index = LookupIndex::build(set);
    let counts = index.category_counts();
    assert!(counts.contains(&(Category::ClassGuides, 3)));
    assert!(counts.contains(&(Category::Routes, 2)));
    assert!(counts.contains(&(Category::Auxiliary, 2)));
    assert!(counts.contains(&(Category::RaidBosses, 1)));

    // Merged provider trees land on one entry.
    let prot = index.guide("Paladin", "Protection").unwrap();
    assert_eq!(
        prot.wowhead_url.as_deref(),
        Some("https://wowhead.example/paladin/protection")
    );
    assert_eq!(
        prot.icyveins_url.as_deref(),
        Some("https://icy.example/paladin/protection")
    );

    // Wowhead-only entry still resolves.
    let ret = index.guide("paladin", "retribution").unwrap();
    assert!(ret.icyveins_url.is_none());

    assert_eq!(
        index.route("hoa").unwrap().url,
        "https://example.com/routes/hoa"
    );
    assert_eq!(
        index.aux_entry("tank_rankings").unwrap().url_or_text,
        "https://example.com/rankings/tank"
    );
    assert_eq!(
        index.boss("ulgrax").unwrap().display_name,
        "Ulgrax the Devourer"
    );
}

#[test]
fn partial_route_text_matches_by_slug_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let sources = full_fixture(dir.path());
    let (set, _) = load_mappings(&sources);
    let index = LookupIndex::build(set);

    let results = index.search(Category::Routes, "ho", None);
    let labels: Vec<&str> = results.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Halls of Atonement"]);
}

#[test]
fn missing_file_empties_one_category_only() {
    let dir = tempfile::tempdir().unwrap();
    let sources = full_fixture(dir.path());
    fs::remove_file(&sources.raid).unwrap();

    let (set, diagnostics) = load_mappings(&sources);

    let missing: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::MissingSource)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].severity, Severity::Warning);

    assert_eq!(set.len(Category::RaidBosses), 0);
    assert_eq!(set.len(Category::Routes), 2);
    assert_eq!(set.len(Category::ClassGuides), 3);
}

#[test]
fn unparseable_file_is_an_error_but_load_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let sources = full_fixture(dir.path());
    write(dir.path(), "raid.yaml", "bosses: [not: valid: yaml: {{{");

    let (set, diagnostics) = load_mappings(&sources);

    assert!(diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::ParseError && d.is_error()));
    assert_eq!(set.len(Category::RaidBosses), 0);
    assert_eq!(set.len(Category::Routes), 2);
}

#[test]
fn duplicate_guide_pair_keeps_first_and_records_one_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let sources = full_fixture(dir.path());
    write(
        dir.path(),
        "guides.yaml",
        r#"
wowhead:
  paladin:
    protection: https://example.com/X
  "Paladin ":
    Protection: https://example.com/Y
"#,
    );

    let (set, diagnostics) = load_mappings(&sources);
    let index = LookupIndex::build(set);

    assert_eq!(
        index
            .guide("paladin", "protection")
            .unwrap()
            .wowhead_url
            .as_deref(),
        Some("https://example.com/X")
    );
    let duplicates: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::DuplicateKey)
        .collect();
    assert_eq!(duplicates.len(), 1);
}

#[test]
fn unknown_boss_is_a_miss_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let sources = full_fixture(dir.path());
    let (set, _) = load_mappings(&sources);
    let index = LookupIndex::build(set);

    assert!(index.boss("dimensius").is_none());
}

#[test]
fn all_sources_missing_still_yields_a_usable_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let sources = MappingSources::from_dir(dir.path());

    let (set, diagnostics) = load_mappings(&sources);

    assert_eq!(diagnostics.len(), 4);
    assert!(diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::MissingSource));

    let index = LookupIndex::build(set);
    assert!(index.is_empty());
    assert!(index.search(Category::Routes, "anything", None).is_empty());
}
