//! Content registry and query API.
//!
//! The registry is built once from an [`EntryStore`] and is read-only
//! afterwards. Construction validates the store and builds three lookup
//! structures:
//!
//! - id -> entry, for exact lookup
//! - subcategory -> entries in store order
//! - token -> entries, for free-text search
//!
//! Either every structure is built or construction fails; there is no
//! partially built registry. Queries never fail: a missing id is `None` and
//! a query with no matches is an empty `Vec`.
//!
//! ```ignore
//! let registry = Registry::build(&EntryStore::builtin()?)?;
//!
//! if let Some(entry) = registry.get_entry("psychiatry-panic-disorder") {
//!     println!("{}: {}", entry.name, entry.level(1).map_or("", |l| &l.summary));
//! }
//!
//! for entry in registry.search("panic attack") {
//!     println!("{}", entry.id);
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use psych_types::{is_valid_level, ClinicalRelevance, CrossReference, Entry, LevelContent};

use crate::search::SearchIndex;
use crate::store::EntryStore;
use crate::types::{BuildStats, ContentError, ContentResult, RegistryConfig};

/// A search result with its match score.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    /// The matching entry.
    pub entry: &'a Entry,
    /// Number of distinct query tokens that matched the entry.
    pub score: usize,
}

/// A cross reference paired with its target, if the target exists.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedReference<'a> {
    /// The cross reference as authored.
    pub reference: &'a CrossReference,
    /// The referenced entry, or `None` for a dangling reference.
    pub target: Option<&'a Entry>,
}

impl ResolvedReference<'_> {
    /// Returns true if the target is missing from the registry.
    pub fn is_dangling(&self) -> bool {
        self.target.is_none()
    }
}

/// A cross reference whose target is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference<'a> {
    /// Entry holding the reference.
    pub source_id: &'a str,
    /// Missing target.
    pub target_id: &'a str,
}

/// In-memory, read-only index over a fixed set of entries.
///
/// `Registry` is `Send + Sync`; share it with `Arc<Registry>` or plain
/// references across threads without locking.
pub struct Registry {
    /// Indexed entries in store order.
    entries: Vec<Arc<Entry>>,
    /// Entry positions indexed by id.
    by_id: HashMap<String, usize>,
    /// Entry positions grouped by subcategory, in store order.
    by_subcategory: BTreeMap<String, Vec<usize>>,
    /// Token index over names, aliases and keywords.
    search_index: SearchIndex,
    /// Construction statistics.
    stats: BuildStats,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .field("by_subcategory", &self.by_subcategory.len())
            .field("search_tokens", &self.search_index.token_count())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Registry {
    /// Builds a registry over every entry in `store`.
    ///
    /// # Errors
    /// Returns [`ContentError::DuplicateEntryId`] if two entries share an id,
    /// or [`ContentError::MalformedLevelKey`] if a level key is outside
    /// `1..=5` or disagrees with its content's `level`.
    pub fn build(store: &EntryStore) -> ContentResult<Self> {
        Self::build_with_config(store, &RegistryConfig::default())
    }

    /// Builds a registry over the compiled-in content.
    pub fn builtin() -> ContentResult<Self> {
        Self::build(&EntryStore::builtin()?)
    }

    /// Builds a registry using the given configuration.
    ///
    /// The whole store is validated, including entries the status filter
    /// leaves out.
    pub fn build_with_config(store: &EntryStore, config: &RegistryConfig) -> ContentResult<Self> {
        let start = Instant::now();

        validate_store(store)?;

        let mut entries = Vec::with_capacity(store.len());
        let mut by_id = HashMap::with_capacity(store.len());
        let mut by_subcategory: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut search_index = SearchIndex::new();

        for entry in store.iter() {
            if !config.includes_status(entry.status) {
                continue;
            }

            let position = entries.len();
            by_id.insert(entry.id.clone(), position);
            by_subcategory
                .entry(entry.subcategory.clone())
                .or_default()
                .push(position);
            search_index.insert(position, search_texts(entry, config));
            entries.push(Arc::clone(entry));
        }

        let mut registry = Self {
            entries,
            by_id,
            by_subcategory,
            search_index,
            stats: BuildStats::default(),
        };

        let dangling_references = if config.check_cross_references {
            let dangling = registry.dangling_cross_references();
            for reference in &dangling {
                tracing::debug!(
                    source_id = reference.source_id,
                    target_id = reference.target_id,
                    "Dangling cross reference"
                );
            }
            dangling.len()
        } else {
            0
        };

        registry.stats = BuildStats {
            total_entries: store.len(),
            indexed_entries: registry.entries.len(),
            skipped_entries: store.len() - registry.entries.len(),
            distinct_tokens: registry.search_index.token_count(),
            subcategory_count: registry.by_subcategory.len(),
            dangling_references,
            build_time_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            entries = registry.stats.indexed_entries,
            skipped = registry.stats.skipped_entries,
            subcategories = registry.stats.subcategory_count,
            tokens = registry.stats.distinct_tokens,
            dangling_references = registry.stats.dangling_references,
            "Built content registry"
        );

        Ok(registry)
    }

    // Lookup

    /// Gets an entry by id.
    ///
    /// Returns `None` for unknown ids, e.g. a stale cross reference.
    pub fn get_entry(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&position| self.entries[position].as_ref())
    }

    /// Gets a shared handle to an entry, for callers that outlive the borrow.
    pub fn get_shared(&self, id: &str) -> Option<Arc<Entry>> {
        self.by_id
            .get(id)
            .map(|&position| Arc::clone(&self.entries[position]))
    }

    /// Returns true if an entry with `id` is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Gets one level of an entry.
    pub fn get_level(&self, id: &str, level: u8) -> Option<&LevelContent> {
        self.get_entry(id)?.level(level)
    }

    // Search

    /// Searches names, aliases and keywords.
    ///
    /// Results are ordered by descending number of matched query tokens,
    /// then by ascending id. A query with no tokens returns nothing.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.search_scored(query)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    /// Like [`Registry::search`], keeping at most `limit` results.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&Entry> {
        self.search_scored(query)
            .into_iter()
            .take(limit)
            .map(|hit| hit.entry)
            .collect()
    }

    /// Like [`Registry::search`], returning each entry's score.
    pub fn search_scored(&self, query: &str) -> Vec<SearchHit<'_>> {
        let mut hits: Vec<SearchHit<'_>> = self
            .search_index
            .score(query)
            .into_iter()
            .map(|(position, score)| SearchHit {
                entry: self.entries[position].as_ref(),
                score,
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.entry.id.cmp(&b.entry.id))
        });
        hits
    }

    // Grouping

    /// Gets the entries of a subcategory in store order.
    ///
    /// Unknown subcategories yield an empty list.
    pub fn get_by_subcategory(&self, subcategory: &str) -> Vec<&Entry> {
        self.by_subcategory
            .get(subcategory)
            .map(|positions| self.at_positions(positions))
            .unwrap_or_default()
    }

    /// Returns the known subcategory names in ascending order.
    pub fn subcategories(&self) -> impl Iterator<Item = &str> {
        self.by_subcategory.keys().map(String::as_str)
    }

    /// Returns entries whose clinical relevance is at least `min`, in store order.
    pub fn by_clinical_relevance(&self, min: ClinicalRelevance) -> Vec<&Entry> {
        self.entries()
            .filter(|e| e.tags.clinical_relevance >= min)
            .collect()
    }

    // Cross references

    /// Resolves the cross references of an entry.
    ///
    /// Returns an empty list for unknown ids.
    pub fn resolve_cross_references(&self, id: &str) -> Vec<ResolvedReference<'_>> {
        let Some(entry) = self.get_entry(id) else {
            return Vec::new();
        };

        entry
            .cross_references
            .iter()
            .map(|reference| ResolvedReference {
                reference,
                target: self.get_entry(&reference.target_id),
            })
            .collect()
    }

    /// Lists every cross reference whose target is not indexed, in store order.
    pub fn dangling_cross_references(&self) -> Vec<DanglingReference<'_>> {
        self.entries()
            .flat_map(|entry| {
                entry
                    .cross_references
                    .iter()
                    .filter(move |r| !self.contains(&r.target_id))
                    .map(move |r| DanglingReference {
                        source_id: &entry.id,
                        target_id: &r.target_id,
                    })
            })
            .collect()
    }

    // Statistics

    /// Returns the number of indexed entries.
    pub fn count(&self) -> usize {
        self.stats.indexed_entries
    }

    /// Returns true if no entries are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all indexed entries in store order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().map(Arc::as_ref)
    }

    /// Returns construction statistics.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    fn at_positions(&self, positions: &[usize]) -> Vec<&Entry> {
        positions
            .iter()
            .map(|&position| self.entries[position].as_ref())
            .collect()
    }
}

/// Checks id uniqueness and level keys across the whole store.
fn validate_store(store: &EntryStore) -> ContentResult<()> {
    let mut seen = HashSet::with_capacity(store.len());

    for entry in store.iter() {
        if !seen.insert(entry.id.as_str()) {
            return Err(ContentError::DuplicateEntryId {
                id: entry.id.clone(),
            });
        }

        for (&key, content) in &entry.levels {
            if !is_valid_level(key) || content.level != key {
                return Err(ContentError::MalformedLevelKey {
                    entry_id: entry.id.clone(),
                    key,
                    level: content.level,
                });
            }
        }
    }

    Ok(())
}

/// Returns the texts an entry is searchable by.
fn search_texts<'a>(entry: &'a Entry, config: &RegistryConfig) -> Vec<&'a str> {
    let mut texts: Vec<&str> = entry.names().collect();
    if config.index_localized_names {
        texts.extend(entry.name_es.as_deref());
    }
    texts.extend(entry.tags.keywords.iter().map(String::as_str));
    texts
}
