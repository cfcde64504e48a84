//! Structured entry metadata.

use std::collections::BTreeSet;

use crate::{BodySystem, ClinicalRelevance};

/// Board exam relevance flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExamRelevance {
    /// Tested on USMLE steps.
    #[cfg_attr(feature = "serde", serde(default))]
    pub usmle: bool,
    /// Tested on NBME subject exams.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nbme: bool,
    /// Shelf exams that cover the entry (e.g. "psychiatry").
    #[cfg_attr(feature = "serde", serde(default))]
    pub shelf: Vec<String>,
}

/// Structured metadata attached to an entry.
///
/// `keywords` feed the registry's search index alongside the entry's names.
///
/// # Examples
///
/// ```
/// use psych_types::{BodySystem, ClinicalRelevance, Tags};
///
/// let mut tags = Tags::new(ClinicalRelevance::High);
/// tags.systems.insert(BodySystem::Nervous);
/// tags.keywords.insert("worry".to_string());
///
/// assert!(tags.has_keyword("Worry"));
/// assert!(!tags.has_keyword("panic"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Tags {
    /// Body or domain systems involved.
    #[cfg_attr(feature = "serde", serde(default))]
    pub systems: BTreeSet<BodySystem>,
    /// Topic labels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub topics: BTreeSet<String>,
    /// Search keywords.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: BTreeSet<String>,
    /// Ordinal clinical relevance.
    pub clinical_relevance: ClinicalRelevance,
    /// Exam relevance, when the entry is board-relevant.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub exam_relevance: Option<ExamRelevance>,
}

impl Tags {
    /// Creates empty tags with the given relevance.
    pub fn new(clinical_relevance: ClinicalRelevance) -> Self {
        Self {
            systems: BTreeSet::new(),
            topics: BTreeSet::new(),
            keywords: BTreeSet::new(),
            clinical_relevance,
            exam_relevance: None,
        }
    }

    /// Returns true if a keyword matches `keyword`, ignoring case.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.keywords.iter().any(|k| k.to_lowercase() == keyword)
    }
}
