//! Loading and validation of the YAML mapping files.
//!
//! [`load_mappings`] is a pure function of the named files: it reads each of
//! the four sources, validates shape entry by entry, and returns the
//! best-effort [`MappingSet`] together with the complete ordered diagnostic
//! list. A missing or unparseable file empties that one category and the load
//! continues; the function itself never fails.
//!
//! Expected file shapes:
//!
//! - guides: top-level `wowhead:` / `icy_veins:` tables, each
//!   `class -> spec -> url`
//! - routes: top-level `dungeons:` table, `slug -> {name, url}`
//! - raid: top-level `bosses:` table, `slug -> {name, url}`
//! - murloc: `classes:` or `mplus_class_guides:` table, else the whole
//!   document; values are a string, a `{name, url|text}` table, or a
//!   `spec -> url` table

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::normalize::{display_from_key, normalize_key};
use crate::types::{AuxEntry, BossEntry, Category, ClassGuideEntry, MappingSet, RouteEntry};

/// Paths of the four mapping files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSources {
    /// Class/spec guides file.
    pub guides: PathBuf,
    /// Mythic+ routes file.
    pub routes: PathBuf,
    /// Auxiliary "murloc" file.
    pub aux: PathBuf,
    /// Raid bosses file.
    pub raid: PathBuf,
}

impl MappingSources {
    /// Conventional file names inside a mappings directory.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            guides: dir.join("guides.yaml"),
            routes: dir.join("mplus-routes.yaml"),
            aux: dir.join("murloc.yaml"),
            raid: dir.join("raid.yaml"),
        }
    }
}

/// Load and validate all four mapping files.
///
/// Never fails: problems become [`Diagnostic`]s and the affected entry or
/// category is skipped. Diagnostics are ordered by source (guides, routes,
/// murloc, raid) and, within a source, by file order.
#[must_use]
pub fn load_mappings(sources: &MappingSources) -> (MappingSet, Vec<Diagnostic>) {
    let mut set = MappingSet::default();
    let mut diagnostics = Vec::new();

    if let Some(doc) = read_document(&sources.guides, &mut diagnostics) {
        ingest_guides(&doc, &label(&sources.guides), &mut set, &mut diagnostics);
    }
    if let Some(doc) = read_document(&sources.routes, &mut diagnostics) {
        ingest_routes(&doc, &label(&sources.routes), &mut set, &mut diagnostics);
    }
    if let Some(doc) = read_document(&sources.aux, &mut diagnostics) {
        ingest_aux(&doc, &label(&sources.aux), &mut set, &mut diagnostics);
    }
    if let Some(doc) = read_document(&sources.raid, &mut diagnostics) {
        ingest_raid(&doc, &label(&sources.raid), &mut set, &mut diagnostics);
    }

    debug!(
        guides = set.len(Category::ClassGuides),
        routes = set.len(Category::Routes),
        aux = set.len(Category::Auxiliary),
        bosses = set.len(Category::RaidBosses),
        diagnostics = diagnostics.len(),
        "mappings loaded"
    );

    (set, diagnostics)
}

fn label(path: &Path) -> String {
    path.display().to_string()
}

/// Read and parse one file. `None` means the category stays empty; the
/// reason is already in `diagnostics`.
fn read_document(path: &Path, diagnostics: &mut Vec<Diagnostic>) -> Option<Value> {
    let source = label(path);
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            diagnostics.push(Diagnostic::missing_source(source));
            return None;
        },
        Err(err) => {
            diagnostics.push(Diagnostic::parse_error(source, err.to_string()));
            return None;
        },
    };

    match serde_yaml::from_str::<Value>(&text) {
        Ok(doc) => Some(doc),
        Err(err) => {
            diagnostics.push(Diagnostic::parse_error(source, err.to_string()));
            None
        },
    }
}

fn as_mapping(value: &Value) -> Option<&serde_yaml::Mapping> {
    value.as_mapping()
}

/// Render a YAML key for diagnostics; non-string keys get a debug rendering.
fn key_text(key: &Value) -> String {
    key.as_str().map_or_else(
        || {
            let mut text = String::new();
            let _ = write!(text, "{key:?}");
            text
        },
        ToString::to_string,
    )
}

fn ingest_guides(
    doc: &Value,
    source: &str,
    set: &mut MappingSet,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if as_mapping(doc).is_none() {
        diagnostics.push(Diagnostic::parse_error(
            source,
            "expected a mapping at the document root",
        ));
        return;
    }

    let wowhead = doc.get("wowhead");
    let icy_veins = doc.get("icy_veins");
    if wowhead.is_none() && icy_veins.is_none() {
        diagnostics.push(Diagnostic::parse_error(
            source,
            "expected a top-level `wowhead` or `icy_veins` table",
        ));
        return;
    }

    for (provider, tree) in [("wowhead", wowhead), ("icy_veins", icy_veins)] {
        let Some(tree) = tree else { continue };
        let Some(classes) = as_mapping(tree) else {
            diagnostics.push(Diagnostic::invalid_entry(
                source,
                provider,
                "expected a class -> spec -> url table",
            ));
            continue;
        };

        for (class_key, specs) in classes {
            let Some(class_raw) = class_key.as_str() else {
                diagnostics.push(Diagnostic::invalid_entry(
                    source,
                    key_text(class_key),
                    "non-string class name",
                ));
                continue;
            };
            let Some(specs) = as_mapping(specs) else {
                diagnostics.push(Diagnostic::invalid_entry(
                    source,
                    class_raw,
                    "expected a spec -> url table",
                ));
                continue;
            };

            for (spec_key, url) in specs {
                ingest_guide_leaf(
                    provider,
                    class_raw,
                    spec_key,
                    url,
                    source,
                    set,
                    diagnostics,
                );
            }
        }
    }
}

fn ingest_guide_leaf(
    provider: &str,
    class_raw: &str,
    spec_key: &Value,
    url: &Value,
    source: &str,
    set: &mut MappingSet,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(spec_raw) = spec_key.as_str() else {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            key_text(spec_key),
            "non-string spec name",
        ));
        return;
    };

    let class = normalize_key(class_raw);
    let spec = normalize_key(spec_raw);
    let display_key = format!("{class} {spec}");
    if class.is_empty() || spec.is_empty() {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            display_key,
            "empty class or spec name after normalization",
        ));
        return;
    }

    let Some(url) = url.as_str().map(str::trim).filter(|url| !url.is_empty()) else {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            display_key,
            format!("missing or empty {provider} url"),
        ));
        return;
    };

    let entry = set
        .guides
        .entry((class, spec))
        .or_insert_with(|| ClassGuideEntry {
            class_name: class_raw.trim().to_string(),
            spec_name: spec_raw.trim().to_string(),
            wowhead_url: None,
            icyveins_url: None,
        });

    // Same provider seen twice for one pair is the duplicate case; the
    // other provider filling its empty slot is the merge case.
    let slot = if provider == "wowhead" {
        &mut entry.wowhead_url
    } else {
        &mut entry.icyveins_url
    };
    if slot.is_some() {
        diagnostics.push(Diagnostic::duplicate_key(source, display_key));
    } else {
        *slot = Some(url.to_string());
    }
}

fn ingest_routes(
    doc: &Value,
    source: &str,
    set: &mut MappingSet,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(table) = section(doc, "dungeons", source, diagnostics) else {
        return;
    };

    for (key, value) in table {
        let Some((slug_raw, slug)) = validated_slug(key, source, diagnostics) else {
            continue;
        };
        let Some((name, url)) = named_link(value, slug_raw, source, diagnostics) else {
            continue;
        };
        if set.routes.contains_key(&slug) {
            diagnostics.push(Diagnostic::duplicate_key(source, slug));
            continue;
        }
        set.routes.insert(
            slug,
            RouteEntry {
                slug: slug_raw.to_string(),
                display_name: name,
                url,
            },
        );
    }
}

fn ingest_raid(doc: &Value, source: &str, set: &mut MappingSet, diagnostics: &mut Vec<Diagnostic>) {
    let Some(table) = section(doc, "bosses", source, diagnostics) else {
        return;
    };

    for (key, value) in table {
        let Some((slug_raw, slug)) = validated_slug(key, source, diagnostics) else {
            continue;
        };
        let Some((name, url)) = named_link(value, slug_raw, source, diagnostics) else {
            continue;
        };
        if set.bosses.contains_key(&slug) {
            diagnostics.push(Diagnostic::duplicate_key(source, slug));
            continue;
        }
        set.bosses.insert(
            slug,
            BossEntry {
                slug: slug_raw.to_string(),
                display_name: name,
                url,
            },
        );
    }
}

fn ingest_aux(doc: &Value, source: &str, set: &mut MappingSet, diagnostics: &mut Vec<Diagnostic>) {
    // The murloc file grew organically: its table may sit under `classes`,
    // under `mplus_class_guides`, or at the document root.
    let Some(root) = as_mapping(doc) else {
        diagnostics.push(Diagnostic::parse_error(
            source,
            "expected a mapping at the document root",
        ));
        return;
    };
    let table = doc
        .get("classes")
        .or_else(|| doc.get("mplus_class_guides"));
    let table = match table {
        Some(nested) => {
            let Some(nested) = as_mapping(nested) else {
                diagnostics.push(Diagnostic::parse_error(
                    source,
                    "expected a key -> entry table",
                ));
                return;
            };
            nested
        },
        None => root,
    };

    for (key, value) in table {
        let Some((key_raw, slug)) = validated_slug(key, source, diagnostics) else {
            continue;
        };
        let Some(entry) = aux_entry(key_raw, value) else {
            diagnostics.push(Diagnostic::invalid_entry(
                source,
                slug,
                "entry has no url or text payload",
            ));
            continue;
        };
        if set.aux.contains_key(&slug) {
            diagnostics.push(Diagnostic::duplicate_key(source, slug));
            continue;
        }
        set.aux.insert(slug, entry);
    }
}

/// Interpret one murloc value. `None` means no usable payload.
fn aux_entry(key_raw: &str, value: &Value) -> Option<AuxEntry> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(AuxEntry {
                key: key_raw.trim().to_string(),
                display_name: display_from_key(key_raw),
                url_or_text: text.to_string(),
            })
        },
        Value::Mapping(map) => {
            let name = value
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map_or_else(|| display_from_key(key_raw), ToString::to_string);

            let payload = value
                .get("url")
                .or_else(|| value.get("text"))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|payload| !payload.is_empty())
                .map(ToString::to_string)
                .or_else(|| spec_link_block(map));

            payload.map(|url_or_text| AuxEntry {
                key: key_raw.trim().to_string(),
                display_name: name,
                url_or_text,
            })
        },
        _ => None,
    }
}

/// Flatten a `spec -> url` table into a line-per-spec text block, sorted by
/// spec for determinism. `None` if no value looks like a link.
fn spec_link_block(map: &serde_yaml::Mapping) -> Option<String> {
    let mut pairs: Vec<(String, &str)> = map
        .iter()
        .filter_map(|(spec, url)| {
            let spec = spec.as_str()?;
            let url = url.as_str()?.trim();
            url.starts_with("http").then(|| (display_from_key(spec), url))
        })
        .collect();
    if pairs.is_empty() {
        return None;
    }
    pairs.sort();

    let mut block = String::new();
    for (i, (spec, url)) in pairs.iter().enumerate() {
        if i > 0 {
            block.push('\n');
        }
        let _ = write!(block, "{spec}: {url}");
    }
    Some(block)
}

/// Resolve the expected top-level table of a document; its absence is a
/// parse error, not a silent empty.
fn section<'a>(
    doc: &'a Value,
    key: &str,
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<&'a serde_yaml::Mapping> {
    if as_mapping(doc).is_none() {
        diagnostics.push(Diagnostic::parse_error(
            source,
            "expected a mapping at the document root",
        ));
        return None;
    }
    let Some(nested) = doc.get(key) else {
        diagnostics.push(Diagnostic::parse_error(
            source,
            format!("expected a top-level `{key}` table"),
        ));
        return None;
    };
    let Some(table) = as_mapping(nested) else {
        diagnostics.push(Diagnostic::parse_error(
            source,
            format!("`{key}` is not a key -> entry table"),
        ));
        return None;
    };
    Some(table)
}

fn validated_slug<'a>(
    key: &'a Value,
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<(&'a str, String)> {
    let Some(raw) = key.as_str() else {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            key_text(key),
            "non-string key",
        ));
        return None;
    };
    let slug = normalize_key(raw);
    if slug.is_empty() {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            raw,
            "empty key after normalization",
        ));
        return None;
    }
    Some((raw, slug))
}

/// Extract `{name, url}` from a route/boss value; `name` falls back to a
/// prettified slug, `url` is required.
fn named_link(
    value: &Value,
    slug_raw: &str,
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<(String, String)> {
    if as_mapping(value).is_none() {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            slug_raw,
            "expected a table with `name` and `url`",
        ));
        return None;
    }

    let name = value
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(|| display_from_key(slug_raw), ToString::to_string);

    let Some(url) = value
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())
    else {
        diagnostics.push(Diagnostic::invalid_entry(
            source,
            slug_raw,
            "missing or empty url",
        ));
        return None;
    };

    Some((name, url.to_string()))
}
