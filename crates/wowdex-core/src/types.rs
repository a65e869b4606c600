//! Core data types: the four mapping categories and the loaded set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four mapping categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Class/spec guide links (two-level key: class, then spec).
    ClassGuides,
    /// Mythic+ route links keyed by dungeon slug.
    Routes,
    /// Auxiliary "murloc" entries keyed by a flat slug.
    Auxiliary,
    /// Raid boss guide links keyed by boss slug.
    RaidBosses,
}

impl Category {
    /// All categories, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::ClassGuides,
        Self::Routes,
        Self::Auxiliary,
        Self::RaidBosses,
    ];

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassGuides => "class-guides",
            Self::Routes => "routes",
            Self::Auxiliary => "auxiliary",
            Self::RaidBosses => "raid-bosses",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guide entry for one class/spec pair.
///
/// Merged from the `wowhead` and `icy_veins` provider trees of the guides
/// file; at least one of the two URLs is always present after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGuideEntry {
    /// Class name as written in the source file (trimmed).
    pub class_name: String,
    /// Spec name as written in the source file (trimmed).
    pub spec_name: String,
    /// Wowhead guide link, if the wowhead tree has this pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wowhead_url: Option<String>,
    /// Icy Veins guide link, if the icy_veins tree has this pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icyveins_url: Option<String>,
}

/// A Mythic+ route link for one dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Dungeon slug as written in the source file (trimmed).
    pub slug: String,
    /// Presentable dungeon name.
    pub display_name: String,
    /// Route link.
    pub url: String,
}

/// An auxiliary entry from the murloc file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxEntry {
    /// Entry key as written in the source file (trimmed).
    pub key: String,
    /// Presentable name.
    pub display_name: String,
    /// Link or free-text payload.
    pub url_or_text: String,
}

/// A raid boss guide link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossEntry {
    /// Boss slug as written in the source file (trimmed).
    pub slug: String,
    /// Presentable boss name.
    pub display_name: String,
    /// Guide link.
    pub url: String,
}

/// The full validated snapshot of all four categories for one load
/// generation.
///
/// Keys of every map are normalized via [`crate::normalize_key`]; guides use
/// the `(class, spec)` pair. A set is built once by the loader and never
/// mutated afterwards - reloads build a fresh set and swap it in wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSet {
    /// Class/spec guides keyed by (normalized class, normalized spec).
    pub guides: BTreeMap<(String, String), ClassGuideEntry>,
    /// Mythic+ routes keyed by normalized dungeon slug.
    pub routes: BTreeMap<String, RouteEntry>,
    /// Auxiliary entries keyed by normalized key.
    pub aux: BTreeMap<String, AuxEntry>,
    /// Raid bosses keyed by normalized boss slug.
    pub bosses: BTreeMap<String, BossEntry>,
}

impl MappingSet {
    /// Number of entries in `category`.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::ClassGuides => self.guides.len(),
            Category::Routes => self.routes.len(),
            Category::Auxiliary => self.aux.len(),
            Category::RaidBosses => self.bosses.len(),
        }
    }

    /// Whether every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&category| self.len(category) == 0)
    }
}

/// One ranked search candidate.
///
/// `value` is the key to feed back into an exact lookup; `label` is the text
/// to show. Mirrors the value/name split of chat-platform autocomplete
/// choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Lookup key (normalized).
    pub value: String,
    /// Presentable label.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_identifiers_are_kebab_case() {
        assert_eq!(Category::ClassGuides.as_str(), "class-guides");
        assert_eq!(Category::Routes.as_str(), "routes");
        assert_eq!(Category::Auxiliary.as_str(), "auxiliary");
        assert_eq!(Category::RaidBosses.as_str(), "raid-bosses");
    }

    #[test]
    fn test_empty_set_reports_zero_everywhere() {
        let set = MappingSet::default();
        assert!(set.is_empty());
        for category in Category::ALL {
            assert_eq!(set.len(category), 0);
        }
    }

    #[test]
    fn test_len_tracks_per_category_inserts() {
        let mut set = MappingSet::default();
        set.routes.insert(
            "hoa".to_string(),
            RouteEntry {
                slug: "hoa".to_string(),
                display_name: "Halls of Atonement".to_string(),
                url: "https://example.com/hoa".to_string(),
            },
        );

        assert_eq!(set.len(Category::Routes), 1);
        assert_eq!(set.len(Category::RaidBosses), 0);
        assert!(!set.is_empty());
    }
}
