//! Tests against the compiled-in content.

mod common;

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use psych_registry::psych_types::{well_known, ClinicalRelevance};
use psych_registry::{ContentError, EntryStore, Registry, RegistryConfig};

fn builtin() -> Registry {
    common::init_test_logging();
    Registry::builtin().unwrap()
}

#[test]
fn test_builtin_ids_are_unique() {
    let store = EntryStore::builtin().unwrap();
    let ids: HashSet<&str> = store.ids().collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn test_count_matches_store() {
    let store = EntryStore::builtin().unwrap();
    let registry = Registry::build(&store).unwrap();

    assert_eq!(registry.count(), store.len());
    assert_eq!(registry.count(), 8);
    assert_eq!(registry.stats().skipped_entries, 0);
}

#[test]
fn test_every_entry_is_reachable_by_id() {
    let registry = builtin();

    for entry in registry.entries() {
        let found = registry.get_entry(&entry.id).unwrap();
        assert_eq!(found.id, entry.id);
        assert!(std::ptr::eq(found, entry));
    }
}

#[test]
fn test_unknown_id() {
    let registry = builtin();
    assert!(registry.get_entry("psychiatry-does-not-exist").is_none());
    assert!(registry.get_entry("").is_none());
}

#[test]
fn test_builtin_entries_are_complete() {
    let registry = builtin();

    for entry in registry.entries() {
        assert!(entry.is_complete(), "{} is missing levels", entry.id);
        assert!(entry.is_published(), "{} is not published", entry.id);
        for level in entry.levels.values() {
            assert!(!level.summary.is_empty(), "{} level {}", entry.id, level.level);
            assert!(!level.key_terms.is_empty(), "{} level {}", entry.id, level.level);
        }
    }
}

#[test]
fn test_builtin_subcategories_are_well_known() {
    let registry = builtin();
    let subcategories: Vec<&str> = registry.subcategories().collect();
    assert_eq!(subcategories, well_known::ALL_SUBCATEGORIES.to_vec());
}

#[test]
fn test_subcategories_partition_entries() {
    let registry = builtin();

    let mut grouped: Vec<&str> = registry
        .subcategories()
        .flat_map(|s| registry.get_by_subcategory(s))
        .map(|e| e.id.as_str())
        .collect();
    let mut all: Vec<&str> = registry.entries().map(|e| e.id.as_str()).collect();
    grouped.sort_unstable();
    all.sort_unstable();

    assert_eq!(grouped, all);
}

#[test]
fn test_get_by_subcategory_keeps_store_order() {
    let registry = builtin();
    let ids: Vec<&str> = registry
        .get_by_subcategory(well_known::ANXIETY_DISORDERS)
        .iter()
        .map(|e| e.id.as_str())
        .collect();

    assert_eq!(
        ids,
        vec![
            "psychiatry-generalized-anxiety-disorder",
            "psychiatry-panic-disorder",
            "psychiatry-social-anxiety-disorder",
        ]
    );
}

#[test]
fn test_search_anxiety() {
    let registry = builtin();
    let ids: Vec<&str> = registry.search("anxiety").iter().map(|e| e.id.as_str()).collect();

    // Panic disorder matches through its "Episodic Paroxysmal Anxiety" alias
    assert_eq!(
        ids,
        vec![
            "psychiatry-generalized-anxiety-disorder",
            "psychiatry-panic-disorder",
            "psychiatry-social-anxiety-disorder",
        ]
    );
}

#[test]
fn test_search_is_deterministic() {
    let first = builtin();
    let second = builtin();

    for query in ["anxiety", "disorder", "ssri", "trauma nightmares", "a"] {
        let a: Vec<&str> = first.search(query).iter().map(|e| e.id.as_str()).collect();
        let b: Vec<&str> = second.search(query).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(a, b, "query {query:?}");
        assert_eq!(
            a,
            first.search(query).iter().map(|e| e.id.as_str()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_search_results_are_ranked() {
    let registry = builtin();

    let hits = registry.search_scored("panic attack");
    assert_eq!(hits[0].entry.id, "psychiatry-panic-disorder");
    assert_eq!(hits[0].score, 2);
    for pair in hits.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].entry.id < pair[1].entry.id)
        );
    }
}

#[test]
fn test_search_by_abbreviation() {
    let registry = builtin();

    let ptsd = registry.search("PTSD");
    assert_eq!(ptsd[0].id, "psychiatry-post-traumatic-stress-disorder");

    let mdd: Vec<&str> = registry.search("mdd").iter().map(|e| e.id.as_str()).collect();
    assert_eq!(mdd, vec!["psychiatry-major-depressive-disorder"]);
}

#[test]
fn test_empty_queries() {
    let registry = builtin();
    for query in ["", " ", "\t\n", "--", "()"] {
        assert!(registry.search(query).is_empty(), "query {query:?}");
    }
}

#[test]
fn test_bilingual_search() {
    common::init_test_logging();
    let store = EntryStore::builtin().unwrap();
    let registry = Registry::build_with_config(&store, &RegistryConfig::bilingual()).unwrap();

    let ids: Vec<&str> = registry
        .search("esquizofrenia")
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["psychiatry-schizophrenia"]);

    let trastorno = registry.search("trastorno");
    assert!(trastorno.len() >= 5);
}

#[test]
fn test_builtin_dangling_references() {
    let registry = builtin();

    let dangling: Vec<(&str, &str)> = registry
        .dangling_cross_references()
        .iter()
        .map(|d| (d.source_id, d.target_id))
        .collect();
    assert_eq!(
        dangling,
        vec![
            ("psychiatry-generalized-anxiety-disorder", "psychiatry-ssris"),
            ("psychiatry-bipolar-disorder", "psychiatry-mood-stabilizers"),
            ("psychiatry-schizophrenia", "psychiatry-antipsychotics"),
            ("psychiatry-anorexia-nervosa", "psychiatry-bulimia-nervosa"),
        ]
    );
    assert_eq!(registry.stats().dangling_references, dangling.len());

    let resolved = registry.resolve_cross_references("psychiatry-panic-disorder");
    assert_eq!(resolved.len(), 1);
    assert_eq!(
        resolved[0].target.map(|e| e.name.as_str()),
        Some("Generalized Anxiety Disorder")
    );
}

#[test]
fn test_critical_entries() {
    let registry = builtin();
    let ids: Vec<&str> = registry
        .by_clinical_relevance(ClinicalRelevance::Critical)
        .iter()
        .map(|e| e.id.as_str())
        .collect();

    assert_eq!(
        ids,
        vec![
            "psychiatry-major-depressive-disorder",
            "psychiatry-schizophrenia",
            "psychiatry-anorexia-nervosa",
        ]
    );
}

#[test]
fn test_level_lookup() {
    let registry = builtin();

    let level = registry
        .get_level("psychiatry-major-depressive-disorder", 2)
        .unwrap();
    assert_eq!(level.level, 2);
    assert!(level.clinical_notes.is_some());
    assert!(level.find_key_term("anhedonia").is_some());

    assert!(registry.get_level("psychiatry-major-depressive-disorder", 0).is_none());
    assert!(registry.get_level("psychiatry-major-depressive-disorder", 6).is_none());
}

#[test]
fn test_load_dir_matches_builtin_content() {
    common::init_test_logging();
    let content = concat!(env!("CARGO_MANIFEST_DIR"), "/content");

    let from_disk = EntryStore::load_dir(content).unwrap();
    let builtin = EntryStore::builtin().unwrap();

    let mut disk_ids: Vec<&str> = from_disk.ids().collect();
    let mut builtin_ids: Vec<&str> = builtin.ids().collect();
    disk_ids.sort_unstable();
    builtin_ids.sort_unstable();
    assert_eq!(disk_ids, builtin_ids);

    let registry = Registry::build(&from_disk).unwrap();
    assert_eq!(registry.count(), builtin.len());
}

#[test]
fn test_load_dir_with_duplicate_fails_build() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let source = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/content/anxiety-disorders/panic-disorder.json"
    );
    let json = fs::read_to_string(source).unwrap();
    fs::write(dir.path().join("panic.json"), &json).unwrap();
    fs::write(dir.path().join("panic-copy.json"), &json).unwrap();

    let store = EntryStore::load_dir(dir.path()).unwrap();
    match Registry::build(&store) {
        Err(ContentError::DuplicateEntryId { id }) => assert_eq!(id, "psychiatry-panic-disorder"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_concurrent_readers() {
    let registry = Arc::new(builtin());
    let expected: Vec<String> = registry
        .search("disorder")
        .iter()
        .map(|e| e.id.clone())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let ids: Vec<String> = registry
                    .search("disorder")
                    .iter()
                    .map(|e| e.id.clone())
                    .collect();
                assert!(registry.get_entry("psychiatry-schizophrenia").is_some());
                ids
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
