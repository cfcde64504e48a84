//! Explanatory depth levels.
//!
//! Every entry explains its subject at up to five levels, from
//! patient-friendly (1) to expert (5). This module provides the
//! `LevelContent` record for one level and the helpers for level numbers.

/// Lowest content level (patient-friendly).
pub const MIN_LEVEL: u8 = 1;

/// Highest content level (expert).
pub const MAX_LEVEL: u8 = 5;

/// All content levels in ascending order.
pub const ALL_LEVELS: [u8; 5] = [1, 2, 3, 4, 5];

/// Returns true if `level` is within `MIN_LEVEL..=MAX_LEVEL`.
pub fn is_valid_level(level: u8) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Returns the audience name of a level.
///
/// Returns `None` for numbers outside `1..=5`.
///
/// # Examples
///
/// ```
/// use psych_types::level_name;
///
/// assert_eq!(level_name(1), Some("patient-friendly"));
/// assert_eq!(level_name(5), Some("expert"));
/// assert_eq!(level_name(6), None);
/// ```
pub fn level_name(level: u8) -> Option<&'static str> {
    match level {
        1 => Some("patient-friendly"),
        2 => Some("basic"),
        3 => Some("intermediate"),
        4 => Some("advanced"),
        5 => Some("expert"),
        _ => None,
    }
}

/// A glossary term introduced at a given level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeyTerm {
    /// The term itself.
    pub term: String,
    /// Plain-language definition.
    pub definition: String,
    /// Optional pronunciation guide (e.g. "deh-PRESS-shun").
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub pronunciation: Option<String>,
}

/// The explanatory content for one depth level of an entry.
///
/// # Examples
///
/// ```
/// use psych_types::{KeyTerm, LevelContent};
///
/// let level = LevelContent {
///     level: 1,
///     summary: "Worry that will not switch off.".to_string(),
///     explanation: "## What it feels like\n...".to_string(),
///     key_terms: vec![KeyTerm {
///         term: "Anxiety".to_string(),
///         definition: "A feeling of worry or fear".to_string(),
///         pronunciation: None,
///     }],
///     analogies: vec![],
///     examples: vec![],
///     patient_counseling_points: vec![],
///     clinical_notes: None,
/// };
///
/// assert_eq!(level.audience(), Some("patient-friendly"));
/// assert_eq!(level.find_key_term("anxiety").map(|t| t.definition.as_str()),
///            Some("A feeling of worry or fear"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LevelContent {
    /// Level number, must equal its key in the parent entry.
    pub level: u8,
    /// Short summary.
    pub summary: String,
    /// Long-form markdown-like explanation.
    pub explanation: String,
    /// Key terms in presentation order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub key_terms: Vec<KeyTerm>,
    /// Analogies that make the level's ideas concrete.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub analogies: Vec<String>,
    /// Worked examples or vignettes.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub examples: Vec<String>,
    /// Points to cover when counseling a patient.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub patient_counseling_points: Vec<String>,
    /// Free-text notes for clinicians.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub clinical_notes: Option<String>,
}

impl LevelContent {
    /// Returns the audience name for this level, if the level is valid.
    pub fn audience(&self) -> Option<&'static str> {
        level_name(self.level)
    }

    /// Finds a key term by case-insensitive name.
    pub fn find_key_term(&self, term: &str) -> Option<&KeyTerm> {
        self.key_terms
            .iter()
            .find(|t| t.term.eq_ignore_ascii_case(term))
    }
}
