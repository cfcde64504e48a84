//! Citations, cross references and media carried by entries.
//!
//! The registry never interprets these records beyond resolving
//! cross-reference targets; they are passed through to presentation layers.

use crate::{CitationType, CrossReferenceKind, EntryId, MediaType};

/// A bibliographic source backing an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Citation {
    /// Citation identifier, unique within its entry.
    pub id: String,
    /// Kind of publication.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub citation_type: CitationType,
    /// Title of the work.
    pub title: String,
    /// Authors in citation order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub authors: Vec<String>,
    /// Publisher, journal or site.
    pub source: String,
    /// Chapter, when citing part of a book.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub chapter: Option<String>,
    /// Link to the work.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub url: Option<String>,
    /// License the excerpted material is used under.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub license: Option<String>,
}

/// A link from one entry to another.
///
/// The target may not exist in the registry; callers resolve it through
/// the registry and treat a miss as a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CrossReference {
    /// Identifier of the referenced entry.
    pub target_id: EntryId,
    /// Declared kind of the target (e.g. "condition", "topic", "process").
    pub target_type: String,
    /// How the target relates to the source entry.
    pub relationship: CrossReferenceKind,
    /// Display label.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
}

/// An illustration or clip attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MediaItem {
    /// Media identifier.
    pub id: String,
    /// Kind of media.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub media_type: MediaType,
    /// Asset file name.
    pub filename: String,
    /// Title shown with the asset.
    pub title: String,
    /// Longer description or alt text.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}
