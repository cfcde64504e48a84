//! Registry-specific types: errors, configuration and build statistics.

use std::path::PathBuf;

use psych_types::ContentStatus;
use thiserror::Error;

/// Errors that can occur while loading content or building the registry.
///
/// All of these are load-time failures. Query operations never return an
/// error; a missing entry or an empty result is a normal value.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Two entries share the same identifier.
    #[error("Duplicate entry id: {id}")]
    DuplicateEntryId {
        /// The identifier that appeared more than once.
        id: String,
    },

    /// A level key is outside 1..=5 or disagrees with its content's level.
    #[error("Malformed level key {key} in entry '{entry_id}' (content declares level {level})")]
    MalformedLevelKey {
        /// The entry containing the bad level.
        entry_id: String,
        /// The key in the entry's level map.
        key: u8,
        /// The level number declared by the content itself.
        level: u8,
    },

    /// An entry document is not valid JSON or does not match the entry schema.
    #[error("Invalid entry document {source_name}: {source}")]
    Json {
        /// File name or label of the offending document.
        source_name: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// I/O error reading content documents.
    #[error("IO error reading content: {0}")]
    Io(#[from] std::io::Error),

    /// A content directory could not be traversed.
    #[error("Error walking content directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Content directory not found.
    #[error("Content directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },
}

/// Result type for content loading and registry construction.
pub type ContentResult<T> = Result<T, ContentError>;

/// Configuration for registry construction.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Statuses to include (empty = all statuses).
    pub statuses: Vec<ContentStatus>,
    /// Whether Spanish display names feed the search index.
    pub index_localized_names: bool,
    /// Whether to count and log cross references whose target is missing.
    pub check_cross_references: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            statuses: vec![], // All statuses by default
            index_localized_names: false,
            check_cross_references: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a config that only indexes published entries.
    pub fn published_only() -> Self {
        Self {
            statuses: vec![ContentStatus::Published],
            ..Self::default()
        }
    }

    /// Creates a config that also indexes Spanish display names.
    pub fn bilingual() -> Self {
        Self {
            index_localized_names: true,
            ..Self::default()
        }
    }

    /// Returns true if entries with `status` are included.
    pub fn includes_status(&self, status: ContentStatus) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&status)
    }
}

/// Statistics from building a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Entries offered by the store.
    pub total_entries: usize,
    /// Entries indexed by the registry.
    pub indexed_entries: usize,
    /// Entries left out by the status filter.
    pub skipped_entries: usize,
    /// Distinct search tokens.
    pub distinct_tokens: usize,
    /// Distinct subcategories.
    pub subcategory_count: usize,
    /// Cross references whose target is not in the registry.
    pub dangling_references: usize,
    /// Time taken to build in milliseconds.
    pub build_time_ms: u64,
}

impl BuildStats {
    /// Returns the percentage of store entries that were indexed.
    pub fn index_rate(&self) -> f64 {
        if self.total_entries == 0 {
            0.0
        } else {
            (self.indexed_entries as f64 / self.total_entries as f64) * 100.0
        }
    }
}

/// Entry documents discovered under a content directory.
#[derive(Debug, Clone, Default)]
pub struct ContentFiles {
    /// Root directory that was scanned.
    pub root: PathBuf,
    /// JSON entry documents, sorted by path.
    pub documents: Vec<PathBuf>,
}

impl ContentFiles {
    /// Returns the number of discovered documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if no documents were discovered.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
