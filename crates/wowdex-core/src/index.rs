//! Exact-match lookup and ranked partial-match search over a loaded
//! [`MappingSet`].
//!
//! A [`LookupIndex`] is built once from a loaded set and is read-only
//! afterwards. Searches are deterministic: candidates match in three tiers -
//! exact normalized match, prefix match, then substring match anywhere in the
//! key or display name - and are ordered alphabetically by display name
//! within a tier. Queries are normalized exactly like stored keys, so case,
//! separators, and diacritics never matter.

use std::collections::HashMap;

use crate::normalize::normalize_key;
use crate::types::{
    AuxEntry, BossEntry, Category, ClassGuideEntry, MappingSet, RouteEntry, Suggestion,
};

/// Default cap on search results, matching the usual chat-platform
/// autocomplete limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 25;

/// One searchable candidate: normalized key, presentable label, and the
/// normalized label used for matching and ordering.
#[derive(Debug, Clone)]
struct Candidate {
    key: String,
    label: String,
    label_norm: String,
}

impl Candidate {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            label_norm: normalize_key(label),
        }
    }

    fn suggestion(&self) -> Suggestion {
        Suggestion {
            value: self.key.clone(),
            label: self.label.clone(),
        }
    }
}

/// Sort candidates alphabetically by normalized label, then by key, so
/// result order is a total order independent of source file order.
fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        a.label_norm
            .cmp(&b.label_norm)
            .then_with(|| a.key.cmp(&b.key))
    });
}

/// Immutable queryable view over one loaded [`MappingSet`].
#[derive(Debug)]
pub struct LookupIndex {
    set: MappingSet,
    limit: usize,
    /// Unique class names from the guides category, alphabetical.
    classes: Vec<Candidate>,
    /// Spec candidates per normalized class name, each list alphabetical.
    specs_by_class: HashMap<String, Vec<Candidate>>,
    routes: Vec<Candidate>,
    aux: Vec<Candidate>,
    bosses: Vec<Candidate>,
}

impl LookupIndex {
    /// Build an index with the default suggestion cap.
    #[must_use]
    pub fn build(set: MappingSet) -> Self {
        Self::with_limit(set, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Build an index with an explicit suggestion cap.
    #[must_use]
    pub fn with_limit(set: MappingSet, limit: usize) -> Self {
        let mut classes: Vec<Candidate> = Vec::new();
        let mut specs_by_class: HashMap<String, Vec<Candidate>> = HashMap::new();
        for ((class, spec), entry) in &set.guides {
            if !classes.iter().any(|candidate| &candidate.key == class) {
                classes.push(Candidate::new(class, &entry.class_name));
            }
            specs_by_class
                .entry(class.clone())
                .or_default()
                .push(Candidate::new(spec, &entry.spec_name));
        }
        sort_candidates(&mut classes);
        for specs in specs_by_class.values_mut() {
            sort_candidates(specs);
        }

        let mut routes: Vec<Candidate> = set
            .routes
            .iter()
            .map(|(slug, entry)| Candidate::new(slug, &entry.display_name))
            .collect();
        sort_candidates(&mut routes);

        let mut aux: Vec<Candidate> = set
            .aux
            .iter()
            .map(|(key, entry)| Candidate::new(key, &entry.display_name))
            .collect();
        sort_candidates(&mut aux);

        let mut bosses: Vec<Candidate> = set
            .bosses
            .iter()
            .map(|(slug, entry)| Candidate::new(slug, &entry.display_name))
            .collect();
        sort_candidates(&mut bosses);

        Self {
            set,
            limit,
            classes,
            specs_by_class,
            routes,
            aux,
            bosses,
        }
    }

    /// The suggestion cap this index was built with.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Exact lookup of a class/spec guide. Inputs are normalized before
    /// comparison; a miss is `None`, never an error.
    #[must_use]
    pub fn guide(&self, class: &str, spec: &str) -> Option<&ClassGuideEntry> {
        self.set
            .guides
            .get(&(normalize_key(class), normalize_key(spec)))
    }

    /// Exact lookup of a Mythic+ route by dungeon slug.
    #[must_use]
    pub fn route(&self, slug: &str) -> Option<&RouteEntry> {
        self.set.routes.get(&normalize_key(slug))
    }

    /// Exact lookup of an auxiliary entry by key.
    #[must_use]
    pub fn aux_entry(&self, key: &str) -> Option<&AuxEntry> {
        self.set.aux.get(&normalize_key(key))
    }

    /// Exact lookup of a raid boss by slug.
    #[must_use]
    pub fn boss(&self, slug: &str) -> Option<&BossEntry> {
        self.set.bosses.get(&normalize_key(slug))
    }

    /// Ranked partial-text search over one category, capped at the index
    /// limit.
    ///
    /// For [`Category::ClassGuides`] the optional `filter` selects the second
    /// autocomplete step: `None` searches class names, `Some(class)` searches
    /// that class's spec names (unknown class: empty result). Other
    /// categories ignore `filter`.
    ///
    /// An empty query returns the first entries in alphabetical order, which
    /// serves as the "show all" autocomplete default. An empty category
    /// returns an empty list.
    #[must_use]
    pub fn search(&self, category: Category, query: &str, filter: Option<&str>) -> Vec<Suggestion> {
        let candidates = match category {
            Category::ClassGuides => match filter {
                None => &self.classes,
                Some(class) => {
                    let Some(specs) = self.specs_by_class.get(&normalize_key(class)) else {
                        return Vec::new();
                    };
                    specs
                },
            },
            Category::Routes => &self.routes,
            Category::Auxiliary => &self.aux,
            Category::RaidBosses => &self.bosses,
        };
        self.rank(candidates, query)
    }

    /// Entry counts per category, for startup reporting.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.set.len(category)))
            .collect()
    }

    /// Whether every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn rank(&self, candidates: &[Candidate], query: &str) -> Vec<Suggestion> {
        let query = normalize_key(query);
        if query.is_empty() {
            return candidates
                .iter()
                .take(self.limit)
                .map(Candidate::suggestion)
                .collect();
        }

        let mut exact = Vec::new();
        let mut prefix = Vec::new();
        let mut substring = Vec::new();
        for candidate in candidates {
            if candidate.key == query || candidate.label_norm == query {
                exact.push(candidate);
            } else if candidate.key.starts_with(&query)
                || candidate.label_norm.starts_with(&query)
            {
                prefix.push(candidate);
            } else if candidate.key.contains(&query) || candidate.label_norm.contains(&query) {
                substring.push(candidate);
            }
        }

        exact
            .into_iter()
            .chain(prefix)
            .chain(substring)
            .take(self.limit)
            .map(Candidate::suggestion)
            .collect()
    }
}
