//! Entry document parser.
//!
//! An entry document is a JSON object holding exactly one [`Entry`] with
//! camelCase field names. Documents are parsed once, at store construction.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use psych_types::Entry;

use crate::types::{ContentError, ContentResult};

/// A named, unparsed entry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDocument<'a> {
    /// File name or label used in error messages.
    pub source_name: &'a str,
    /// Raw JSON text.
    pub json: &'a str,
}

impl<'a> EntryDocument<'a> {
    /// Creates a document from a label and its JSON text.
    pub const fn new(source_name: &'a str, json: &'a str) -> Self {
        Self { source_name, json }
    }

    /// Parses the document into an entry.
    pub fn parse(&self) -> ContentResult<Entry> {
        parse_entry(self.source_name, self.json)
    }
}

/// Parses a single entry from JSON text.
///
/// # Errors
/// Returns [`ContentError::Json`] naming `source_name` if the text is not a
/// valid entry document.
pub fn parse_entry(source_name: &str, json: &str) -> ContentResult<Entry> {
    serde_json::from_str(json).map_err(|source| ContentError::Json {
        source_name: source_name.to_string(),
        source,
    })
}

/// Reads and parses an entry document from disk.
pub fn read_entry<P: AsRef<Path>>(path: P) -> ContentResult<Entry> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    parse_entry(&path.display().to_string(), &json)
}

/// Parses documents in order, stopping at the first failure.
pub fn parse_documents(documents: &[EntryDocument<'_>]) -> ContentResult<Vec<Entry>> {
    documents.iter().map(EntryDocument::parse).collect()
}

/// Parses documents using parallel workers.
///
/// Output order matches input order. If several documents fail, the error
/// of the earliest one in input order is returned.
#[cfg(feature = "parallel")]
pub fn parse_documents_parallel(documents: &[EntryDocument<'_>]) -> ContentResult<Vec<Entry>> {
    let parsed: Vec<ContentResult<Entry>> =
        documents.par_iter().map(EntryDocument::parse).collect();
    parsed.into_iter().collect()
}
