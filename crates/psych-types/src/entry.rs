//! Content entry type.
//!
//! This module provides the `Entry` struct: one condition or topic with its
//! multi-level explanations, metadata and carried auxiliary records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::level::ALL_LEVELS;
use crate::{
    Citation, ContentStatus, CrossReference, EntryId, EntryType, LevelContent, MediaItem, Tags,
};

/// One condition, topic or concept with its complete multi-level content.
///
/// Entries are immutable once built; the registry shares them read-only.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use psych_types::timestamp::parse_timestamp;
/// use psych_types::{ClinicalRelevance, ContentStatus, Entry, EntryType, Tags};
///
/// let date = parse_timestamp("2026-02-05T00:00:00.000Z").unwrap();
/// let entry = Entry {
///     id: "psychiatry-panic-disorder".to_string(),
///     entry_type: EntryType::Condition,
///     name: "Panic Disorder".to_string(),
///     name_es: Some("Trastorno de Pánico".to_string()),
///     alternate_names: vec![],
///     subcategory: "anxiety-disorders".to_string(),
///     levels: BTreeMap::new(),
///     tags: Tags::new(ClinicalRelevance::High),
///     citations: vec![],
///     cross_references: vec![],
///     media: vec![],
///     created_at: date,
///     updated_at: date,
///     version: 1,
///     status: ContentStatus::Published,
///     contributors: vec![],
/// };
///
/// assert!(entry.is_published());
/// assert!(!entry.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Entry {
    /// Unique, stable identifier.
    pub id: EntryId,
    /// Condition, topic or concept.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub entry_type: EntryType,
    /// Display name.
    pub name: String,
    /// Spanish display name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name_es: Option<String>,
    /// Aliases and abbreviations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alternate_names: Vec<String>,
    /// Grouping such as "anxiety-disorders".
    pub subcategory: String,
    /// Content keyed by level number (1-5). Partial sets are allowed.
    pub levels: BTreeMap<u8, LevelContent>,
    /// Structured metadata.
    pub tags: Tags,
    /// Sources.
    #[cfg_attr(feature = "serde", serde(default))]
    pub citations: Vec<Citation>,
    /// Links to other entries.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cross_references: Vec<CrossReference>,
    /// Attached media.
    #[cfg_attr(feature = "serde", serde(default))]
    pub media: Vec<MediaItem>,
    /// When the entry was first authored.
    #[cfg_attr(feature = "serde", serde(with = "crate::timestamp::serde_format"))]
    pub created_at: DateTime<Utc>,
    /// When the content last changed.
    #[cfg_attr(feature = "serde", serde(with = "crate::timestamp::serde_format"))]
    pub updated_at: DateTime<Utc>,
    /// Monotonic content version.
    pub version: u32,
    /// Lifecycle status.
    pub status: ContentStatus,
    /// Authors and reviewers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub contributors: Vec<String>,
}

impl Entry {
    /// Returns the content for `level`, if present.
    pub fn level(&self, level: u8) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    /// Returns the level numbers present, ascending.
    pub fn available_levels(&self) -> impl Iterator<Item = u8> + '_ {
        self.levels.keys().copied()
    }

    /// Returns true if all five levels are present.
    pub fn is_complete(&self) -> bool {
        ALL_LEVELS.iter().all(|l| self.levels.contains_key(l))
    }

    /// Returns true if the entry is published.
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }

    /// Returns the display name followed by its aliases.
    ///
    /// The Spanish name is not included; see [`Entry::name_es`].
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.alternate_names.iter().map(String::as_str))
    }
}
