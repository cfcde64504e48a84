//! # psych-types
//!
//! Type definitions for multi-level psychiatry content.
//!
//! Each [`Entry`] describes one condition, topic or concept at up to five
//! levels of explanatory depth ([`LevelContent`]), from patient-friendly (1)
//! to expert (5), together with search keywords, citations, cross
//! references and lifecycle metadata.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Field names serialize in camelCase to match the content documents.
//!
//! ## Usage
//!
//! ```rust
//! use psych_types::{level_name, well_known, ClinicalRelevance, ContentStatus, EntryType};
//!
//! assert_eq!(EntryType::from_name("condition"), Some(EntryType::Condition));
//! assert!(ClinicalRelevance::Critical > ClinicalRelevance::Moderate);
//! assert_eq!(ContentStatus::Published.as_str(), "published");
//! assert_eq!(level_name(5), Some("expert"));
//! assert_eq!(well_known::MOOD_DISORDERS, "mood-disorders");
//! ```

#![warn(missing_docs)]

mod citation;
mod entry;
mod entry_id;
mod enums;
pub mod level;
mod tags;
pub mod timestamp;
pub mod well_known;

// Re-export all public types at crate root
pub use citation::{Citation, CrossReference, MediaItem};
pub use entry::Entry;
pub use entry_id::EntryId;
pub use enums::{
    BodySystem, CitationType, ClinicalRelevance, ContentStatus, CrossReferenceKind, EntryType,
    MediaType,
};
pub use level::{is_valid_level, level_name, KeyTerm, LevelContent, MAX_LEVEL, MIN_LEVEL};
pub use tags::{ExamRelevance, Tags};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        // Verify all types are accessible from crate root
        let _id: EntryId = "psychiatry-anxiety-disorders".to_string();
        let _entry_type = EntryType::Condition;
        let _status = ContentStatus::Published;
        let _relevance = ClinicalRelevance::High;
        let _system = BodySystem::Nervous;
        let _kind = CrossReferenceKind::Related;
        let _citation_type = CitationType::Article;
        let _media_type = MediaType::Diagram;
        let _tags = Tags::new(ClinicalRelevance::Low);
    }

    #[test]
    fn test_level_constants_accessible() {
        assert_eq!(MIN_LEVEL, 1);
        assert_eq!(MAX_LEVEL, 5);
        assert!(is_valid_level(3));
    }
}
