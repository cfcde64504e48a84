//! Content enumeration types.
//!
//! This module provides enum representations for the closed sets used by
//! content entries: entry type, clinical relevance, lifecycle status, body
//! systems, and the kinds carried by citations, cross references and media.
//!
//! Every enum serializes to the same kebab-case name returned by its
//! `as_str` method and accepted by its `from_name` constructor.

/// The kind of content an entry describes.
///
/// # Examples
///
/// ```
/// use psych_types::EntryType;
///
/// assert_eq!(EntryType::from_name("condition"), Some(EntryType::Condition));
/// assert_eq!(EntryType::Topic.as_str(), "topic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EntryType {
    /// A diagnosable condition or disorder.
    Condition,
    /// A broader topic such as a drug class or therapy.
    Topic,
    /// A single concept or mechanism.
    Concept,
}

impl EntryType {
    /// Creates an EntryType from its name.
    ///
    /// Returns `None` if the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "condition" => Some(Self::Condition),
            "topic" => Some(Self::Topic),
            "concept" => Some(Self::Concept),
            _ => None,
        }
    }

    /// Returns the name of this entry type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Condition => "condition",
            Self::Topic => "topic",
            Self::Concept => "concept",
        }
    }
}

/// Clinical relevance of an entry.
///
/// Variants are ordered from least to most relevant, so relevance can be
/// compared with the usual operators.
///
/// # Examples
///
/// ```
/// use psych_types::ClinicalRelevance;
///
/// assert!(ClinicalRelevance::Critical > ClinicalRelevance::High);
/// assert_eq!(ClinicalRelevance::from_name("moderate"), Some(ClinicalRelevance::Moderate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClinicalRelevance {
    /// Background knowledge.
    Low,
    /// Commonly encountered.
    Moderate,
    /// Core clinical knowledge.
    High,
    /// Safety-critical knowledge.
    Critical,
}

impl ClinicalRelevance {
    /// Creates a ClinicalRelevance from its name.
    ///
    /// Returns `None` if the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Returns the name of this relevance level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Lifecycle status of an entry.
///
/// # Examples
///
/// ```
/// use psych_types::ContentStatus;
///
/// assert_eq!(ContentStatus::from_name("published"), Some(ContentStatus::Published));
/// assert_eq!(ContentStatus::Draft.as_str(), "draft");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ContentStatus {
    /// Being written, not yet reviewed.
    Draft,
    /// Reviewed and visible.
    Published,
    /// Retained for reference, superseded.
    Archived,
}

impl ContentStatus {
    /// Creates a ContentStatus from its name.
    ///
    /// Returns `None` if the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    /// Returns the name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

/// Body or domain system an entry relates to.
///
/// Unknown system names deserialize to [`BodySystem::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BodySystem {
    /// Brain, spinal cord and nerves.
    Nervous,
    /// Hormonal glands.
    Endocrine,
    /// Immune system.
    Immune,
    /// Heart and vessels.
    Cardiovascular,
    /// Airways and lungs.
    Respiratory,
    /// Gastrointestinal tract.
    Digestive,
    /// Bones, joints and muscles.
    Musculoskeletal,
    /// Skin.
    Integumentary,
    /// Kidneys and urinary tract.
    Urinary,
    /// Reproductive organs.
    Reproductive,
    /// Any system not listed above.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl BodySystem {
    /// Creates a BodySystem from its name.
    ///
    /// Unrecognized names map to [`BodySystem::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "nervous" => Self::Nervous,
            "endocrine" => Self::Endocrine,
            "immune" => Self::Immune,
            "cardiovascular" => Self::Cardiovascular,
            "respiratory" => Self::Respiratory,
            "digestive" => Self::Digestive,
            "musculoskeletal" => Self::Musculoskeletal,
            "integumentary" => Self::Integumentary,
            "urinary" => Self::Urinary,
            "reproductive" => Self::Reproductive,
            _ => Self::Other,
        }
    }

    /// Returns the name of this system.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nervous => "nervous",
            Self::Endocrine => "endocrine",
            Self::Immune => "immune",
            Self::Cardiovascular => "cardiovascular",
            Self::Respiratory => "respiratory",
            Self::Digestive => "digestive",
            Self::Musculoskeletal => "musculoskeletal",
            Self::Integumentary => "integumentary",
            Self::Urinary => "urinary",
            Self::Reproductive => "reproductive",
            Self::Other => "other",
        }
    }
}

/// Kind of publication a citation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CitationType {
    /// Textbook or manual.
    Textbook,
    /// Journal article.
    Article,
    /// Practice guideline.
    Guideline,
    /// Web resource.
    Website,
    /// Anything else.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// How a cross reference relates its source entry to its target.
///
/// The registry carries relationships without interpreting them. Names not
/// listed here deserialize to [`CrossReferenceKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CrossReferenceKind {
    /// Closely related content.
    Related,
    /// Further reading.
    SeeAlso,
    /// Content that should be read first.
    Prerequisite,
    /// Content useful for differential comparison.
    Contrast,
    /// Another member of the same group.
    Sibling,
    /// The broader entry this one belongs under.
    Parent,
    /// A narrower entry under this one.
    Child,
    /// The source causes the target.
    Causes,
    /// The source is caused by the target.
    CausedBy,
    /// The source affects the target.
    Affects,
    /// The source treats the target.
    Treats,
    /// The source is treated by the target.
    TreatedBy,
    /// The source is diagnosed by the target.
    DiagnosedBy,
    /// The source is managed by the target.
    ManagedBy,
    /// Any relationship not listed above.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl CrossReferenceKind {
    /// Creates a CrossReferenceKind from its name.
    ///
    /// Unrecognized names map to [`CrossReferenceKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "related" => Self::Related,
            "see-also" => Self::SeeAlso,
            "prerequisite" => Self::Prerequisite,
            "contrast" => Self::Contrast,
            "sibling" => Self::Sibling,
            "parent" => Self::Parent,
            "child" => Self::Child,
            "causes" => Self::Causes,
            "caused-by" => Self::CausedBy,
            "affects" => Self::Affects,
            "treats" => Self::Treats,
            "treated-by" => Self::TreatedBy,
            "diagnosed-by" => Self::DiagnosedBy,
            "managed-by" => Self::ManagedBy,
            _ => Self::Other,
        }
    }

    /// Returns the name of this relationship kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Related => "related",
            Self::SeeAlso => "see-also",
            Self::Prerequisite => "prerequisite",
            Self::Contrast => "contrast",
            Self::Sibling => "sibling",
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Causes => "causes",
            Self::CausedBy => "caused-by",
            Self::Affects => "affects",
            Self::Treats => "treats",
            Self::TreatedBy => "treated-by",
            Self::DiagnosedBy => "diagnosed-by",
            Self::ManagedBy => "managed-by",
            Self::Other => "other",
        }
    }
}

/// Kind of media attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MediaType {
    /// Schematic diagram.
    Diagram,
    /// Still image.
    Image,
    /// Video clip.
    Video,
    /// Interactive or looping animation.
    Animation,
    /// Anything else.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}
