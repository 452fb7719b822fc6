//! End-to-end properties of loading, querying and persisting an index.

mod common;

use common::{MALFORMED_SEARCHDATA, SAMPLE_SEARCHDATA};
use symdex::storage::IndexPersistence;
use symdex::{MatchMode, ParseError, SymbolIndex};
use tempfile::TempDir;

#[test]
fn size_equals_top_level_entry_count() {
    let index = SymbolIndex::load_searchdata(SAMPLE_SEARCHDATA).unwrap();
    assert_eq!(index.len(), 5);
    assert_eq!(index.item_count(), 9);
}

#[test]
fn image2d_lookup_returns_class_and_all_constructors() {
    let index = SymbolIndex::load_searchdata(SAMPLE_SEARCHDATA).unwrap();
    let hits: Vec<_> = index.lookup("image2d", MatchMode::Exact).collect();

    assert_eq!(hits.len(), 5);
    assert!(hits.iter().all(|item| item.display_name == "Image2D"));

    // One class page plus four constructor anchors on it.
    let class_pages = hits.iter().filter(|item| item.anchor().is_none()).count();
    assert_eq!(class_pages, 1);
    let constructors = hits
        .iter()
        .filter(|item| item.container.starts_with("cl::Image2D::Image2D"))
        .count();
    assert_eq!(constructors, 4);
}

#[test]
fn duplicate_keys_contribute_to_one_combined_result() {
    let index = SymbolIndex::load_searchdata(SAMPLE_SEARCHDATA).unwrap();
    // 'image' appears as two entries: the class page and two overloads.
    let hits: Vec<_> = index.lookup("image", MatchMode::Exact).collect();
    assert_eq!(hits.len(), 3);
}

#[test]
fn entity_decoding_applies_to_signatures() {
    let index = SymbolIndex::load_searchdata(SAMPLE_SEARCHDATA).unwrap();
    let copy_ctor = index
        .lookup("image", MatchMode::Exact)
        .find(|item| item.container.contains("const Image &image"))
        .expect("copy constructor present");
    assert!(!copy_ctor.container.contains("&amp;"));
}

#[test]
fn unknown_key_yields_empty_sequence() {
    let index = SymbolIndex::load_searchdata(SAMPLE_SEARCHDATA).unwrap();
    assert_eq!(index.lookup("nonexistent-key", MatchMode::Exact).count(), 0);
    assert_eq!(
        index.lookup("nonexistent-key", MatchMode::Substring).count(),
        0
    );
}

#[test]
fn malformed_input_fails_the_whole_load() {
    let err = SymbolIndex::load_searchdata(MALFORMED_SEARCHDATA).unwrap_err();
    assert!(matches!(err, ParseError::Expected { .. }));
}

#[test]
fn persisted_index_round_trips() {
    let index = SymbolIndex::load_searchdata(SAMPLE_SEARCHDATA).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let persistence = IndexPersistence::new(temp_dir.path().to_path_buf());
    let metadata = persistence
        .save(&index, vec!["all_69.js".to_string()])
        .unwrap();
    assert_eq!(metadata.entry_count as usize, index.len());
    assert_eq!(metadata.item_count as usize, index.item_count());

    let reloaded = persistence.load().unwrap();
    assert_eq!(reloaded.entries(), index.entries());
}
