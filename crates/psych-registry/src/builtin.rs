//! Content compiled into the crate.
//!
//! Documents are listed in store order. Adding an entry means adding its
//! JSON file under `content/` and one line here.

use crate::document::EntryDocument;

macro_rules! content {
    ($subcategory:literal, $slug:literal) => {
        EntryDocument::new(
            concat!($subcategory, "/", $slug, ".json"),
            include_str!(concat!("../content/", $subcategory, "/", $slug, ".json")),
        )
    };
}

pub(crate) const BUILTIN_DOCUMENTS: &[EntryDocument<'static>] = &[
    // Anxiety
    content!("anxiety-disorders", "generalized-anxiety-disorder"),
    content!("anxiety-disorders", "panic-disorder"),
    content!("anxiety-disorders", "social-anxiety-disorder"),
    // Mood
    content!("mood-disorders", "major-depressive-disorder"),
    content!("mood-disorders", "bipolar-disorder"),
    // Psychotic
    content!("psychotic-disorders", "schizophrenia"),
    // Trauma
    content!("trauma-disorders", "post-traumatic-stress-disorder"),
    // Eating
    content!("eating-disorders", "anorexia-nervosa"),
];
