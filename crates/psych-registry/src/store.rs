//! Entry store.
//!
//! The store owns the authoritative, immutable sequence of entries the
//! registry is built from. Entries are held behind [`Arc`] so the registry's
//! indexes share them instead of copying.
//!
//! ```ignore
//! let store = EntryStore::builtin()?;
//! let registry = Registry::build(&store)?;
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use psych_types::Entry;

use crate::builtin::BUILTIN_DOCUMENTS;
use crate::document::{parse_documents, read_entry, EntryDocument};
use crate::loader::{discover_content_files, parent_directory_name};
use crate::types::{ContentFiles, ContentResult};

/// Immutable, ordered collection of entries.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Arc<Entry>>,
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already constructed entries, keeping their order.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parses a store from entry documents, in order.
    pub fn from_documents(documents: &[EntryDocument<'_>]) -> ContentResult<Self> {
        Ok(Self::from_entries(parse_documents(documents)?))
    }

    /// Parses a store from entry documents using parallel workers.
    ///
    /// Produces the same store as [`EntryStore::from_documents`].
    #[cfg(feature = "parallel")]
    pub fn from_documents_parallel(documents: &[EntryDocument<'_>]) -> ContentResult<Self> {
        Ok(Self::from_entries(crate::document::parse_documents_parallel(documents)?))
    }

    /// Loads the content compiled into this crate.
    ///
    /// # Errors
    /// Fails only if an embedded document is malformed, which is a build
    /// defect rather than a runtime condition.
    pub fn builtin() -> ContentResult<Self> {
        let start = Instant::now();

        #[cfg(feature = "parallel")]
        let store = Self::from_documents_parallel(BUILTIN_DOCUMENTS)?;
        #[cfg(not(feature = "parallel"))]
        let store = Self::from_documents(BUILTIN_DOCUMENTS)?;

        tracing::info!(
            entries = store.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded builtin content"
        );
        Ok(store)
    }

    /// Discovers and loads every entry document under `path`.
    pub fn load_dir<P: AsRef<Path>>(path: P) -> ContentResult<Self> {
        let files = discover_content_files(path)?;
        Self::load_files(&files)
    }

    /// Loads previously discovered entry documents.
    ///
    /// A document whose parent directory name differs from the subcategory it
    /// declares is loaded anyway; the declared subcategory wins and a warning
    /// is logged.
    pub fn load_files(files: &ContentFiles) -> ContentResult<Self> {
        let mut entries = Vec::with_capacity(files.len());

        for path in &files.documents {
            let entry = read_entry(path)?;
            if let Some(dir) = parent_directory_name(path) {
                if path.parent() != Some(files.root.as_path()) && dir != entry.subcategory {
                    tracing::warn!(
                        entry_id = %entry.id,
                        directory = dir,
                        subcategory = %entry.subcategory,
                        "Entry document directory does not match its subcategory"
                    );
                }
            }
            entries.push(entry);
        }

        tracing::info!(
            root = %files.root.display(),
            entries = entries.len(),
            "Loaded content directory"
        );
        Ok(Self::from_entries(entries))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entry>> {
        self.entries.iter()
    }

    /// Returns the entry ids in store order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }
}

impl FromIterator<Entry> for EntryStore {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
