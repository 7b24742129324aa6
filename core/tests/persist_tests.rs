use std::collections::HashSet;
use std::fs;
use std::io::Write;

use docfind_core::{Error, Index, IndexConfig, QueryMode, StemAlgorithm};
use tempfile::tempdir;

fn docs(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn round_trip_preserves_query_behavior() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.dfix");

    let mut index = Index::new();
    index.add_document("doc1", "this is my first document");
    index.add_document("doc2", "this is my second document");
    index.add_document("doc3", "another document");
    index.dump(&path).unwrap();

    let loaded = Index::load(&path).unwrap();
    assert_eq!(loaded.len(), index.len());
    assert_eq!(loaded.tokens(), index.tokens());
    for term in ["document", "first", "second", "another", "missing"] {
        assert_eq!(loaded.find_by_term(term), index.find_by_term(term));
    }
    for query in ["this AND document", "first OR another", "NOT this"] {
        assert_eq!(loaded.find(query).unwrap(), index.find(query).unwrap());
    }
    assert_eq!(
        loaded.find_with("this document", QueryMode::ImplicitAnd).unwrap(),
        index.find_with("this document", QueryMode::ImplicitAnd).unwrap()
    );
}

#[test]
fn round_trip_preserves_counters_and_configuration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.dfix");

    let stopwords: HashSet<String> = ["the", "a"].iter().map(|w| w.to_string()).collect();
    let mut index = Index::with_config(IndexConfig {
        stemmer: Some(StemAlgorithm::English),
        stopwords,
    });
    index.add_document("coffee", "I liked the coffee");
    index.dump(&path).unwrap();

    let loaded = Index::load(&path).unwrap();
    assert_eq!(loaded.token_frequency("the"), 1);
    assert_eq!(loaded.token_frequency("liked"), 1);
    assert_eq!(loaded.origins("like"), docs(&["liked"]));
    // the stemmer was rebuilt from its identifier
    assert_eq!(loaded.find_by_term("likes"), docs(&["coffee"]));
    assert!(!loaded.tokens().contains("the"));
}

#[test]
fn loaded_index_keeps_stopword_filtering_for_new_documents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.dfix");

    let stopwords: HashSet<String> = ["yes"].iter().map(|w| w.to_string()).collect();
    let mut index = Index::with_config(IndexConfig { stemmer: None, stopwords });
    index.add_document("one", "yes please");
    index.dump(&path).unwrap();

    let mut loaded = Index::load(&path).unwrap();
    loaded.add_document("two", "yes again");
    assert!(!loaded.tokens().contains("yes"));
    assert_eq!(loaded.find_by_term("again"), docs(&["two"]));
}

#[test]
fn dump_overwrites_an_existing_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.dfix");

    let mut first = Index::new();
    first.add_document("old", "stale contents");
    first.dump(&path).unwrap();

    let mut second = Index::new();
    second.add_document("new", "fresh contents");
    second.dump(&path).unwrap();

    let loaded = Index::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.find_by_term("fresh"), docs(&["new"]));
    assert!(loaded.find_by_term("stale").is_empty());
}

#[test]
fn load_rejects_files_without_the_magic_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not-a-snapshot");
    fs::write(&path, b"PK\x03\x04 something else entirely").unwrap();
    match Index::load(&path) {
        Err(Error::Snapshot(_)) => {}
        Err(other) => panic!("expected Snapshot error, got {other}"),
        Ok(_) => panic!("expected Snapshot error, got an index"),
    }
}

#[test]
fn load_rejects_unsupported_versions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("future.dfix");
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(b"DFIX").unwrap();
    f.write_all(&99u32.to_le_bytes()).unwrap();
    drop(f);
    match Index::load(&path) {
        Err(Error::Version { found: 99, expected: 1 }) => {}
        Err(other) => panic!("expected Version error, got {other}"),
        Ok(_) => panic!("expected Version error, got an index"),
    }
}

#[test]
fn load_surfaces_a_truncated_body_as_corruption() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.dfix");

    let mut index = Index::new();
    index.add_document("doc", "some document contents here");
    index.dump(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
    assert!(Index::load(&path).is_err());
}

#[test]
fn load_fails_on_a_missing_file() {
    let dir = tempdir().unwrap();
    match Index::load(dir.path().join("nope.dfix")) {
        Err(Error::Io(_)) => {}
        Err(other) => panic!("expected Io error, got {other}"),
        Ok(_) => panic!("expected Io error, got an index"),
    }
}
