//! Well-known psychiatry subcategories.
//!
//! This module provides constants for the subcategory names used by the
//! bundled content. Subcategories are open-ended strings; these are the
//! groupings the bundled entries use.
//!
//! # Examples
//!
//! ```
//! use psych_types::well_known;
//!
//! assert_eq!(well_known::ANXIETY_DISORDERS, "anxiety-disorders");
//! assert!(well_known::is_well_known_subcategory("mood-disorders"));
//! ```

// =============================================================================
// Subcategories
// =============================================================================

/// Anxiety disorders: GAD, panic disorder, social anxiety, phobias.
pub const ANXIETY_DISORDERS: &str = "anxiety-disorders";

/// Mood disorders: depression, bipolar spectrum.
pub const MOOD_DISORDERS: &str = "mood-disorders";

/// Psychotic disorders: schizophrenia spectrum.
pub const PSYCHOTIC_DISORDERS: &str = "psychotic-disorders";

/// Trauma- and stressor-related disorders.
pub const TRAUMA_DISORDERS: &str = "trauma-disorders";

/// Feeding and eating disorders.
pub const EATING_DISORDERS: &str = "eating-disorders";

/// Every well-known subcategory, in ascending order.
pub const ALL_SUBCATEGORIES: [&str; 5] = [
    ANXIETY_DISORDERS,
    EATING_DISORDERS,
    MOOD_DISORDERS,
    PSYCHOTIC_DISORDERS,
    TRAUMA_DISORDERS,
];

/// Returns true if `name` is one of [`ALL_SUBCATEGORIES`].
pub fn is_well_known_subcategory(name: &str) -> bool {
    ALL_SUBCATEGORIES.contains(&name)
}
