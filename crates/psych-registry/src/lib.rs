//! # psych-registry
//!
//! Immutable registry of multi-level psychiatry content.
//!
//! Entries are parsed once into an [`EntryStore`], validated, and indexed by
//! [`Registry::build`]. The registry answers lookups by id, keyword search,
//! subcategory listing and counts. It is never mutated after construction,
//! so a shared reference can be used from any number of threads.
//!
//! ## Features
//!
//! - `parallel` (default): Parses entry documents with rayon.
//!
//! ## Usage
//!
//! ```rust
//! use psych_registry::Registry;
//!
//! let registry = Registry::builtin()?;
//!
//! let gad = registry.get_entry("psychiatry-generalized-anxiety-disorder").unwrap();
//! assert_eq!(gad.name, "Generalized Anxiety Disorder");
//!
//! let hits = registry.search("panic");
//! assert!(hits.iter().any(|e| e.id == "psychiatry-panic-disorder"));
//!
//! let mood = registry.get_by_subcategory("mood-disorders");
//! assert!(!mood.is_empty());
//! # Ok::<(), psych_registry::ContentError>(())
//! ```

#![warn(missing_docs)]

mod builtin;
pub mod document;
mod loader;
mod registry;
mod search;
mod store;
mod types;

// Re-export psych-types for convenience
pub use psych_types;

#[cfg(feature = "parallel")]
pub use document::parse_documents_parallel;
pub use document::{parse_documents, parse_entry, read_entry, EntryDocument};
pub use loader::discover_content_files;
pub use registry::{DanglingReference, Registry, ResolvedReference, SearchHit};
pub use search::{tokenize, SearchIndex};
pub use store::EntryStore;
pub use types::{BuildStats, ContentError, ContentFiles, ContentResult, RegistryConfig};
