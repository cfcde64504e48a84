//! Content entry identifier type.
//!
//! Entry identifiers are stable, human-readable slugs such as
//! `psychiatry-panic-disorder`. They are the primary key of the registry
//! and the target of cross references.

/// A content entry identifier.
///
/// # Examples
///
/// ```
/// use psych_types::EntryId;
///
/// let id: EntryId = "psychiatry-generalized-anxiety-disorder".to_string();
/// assert!(id.starts_with("psychiatry-"));
/// ```
pub type EntryId = String;
