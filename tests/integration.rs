//! End-to-end tests: CSV catalog -> index -> recommendations.

use aprender_recommend::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const GOODREADS_SAMPLE: &str = "\
Book,Author,Description
Dune,Frank Herbert,\"A desert planet, spice, sand worms and a noble house betrayed.\"
Children of Dune,Frank Herbert,\"The desert planet Arrakis, spice and sand worms after the jihad.\"
Emma,Jane Austen,A clever young woman meddles in village matchmaking.
Persuasion,Jane Austen,\"A young woman, matchmaking and second chances in village society.\"
The Road,Cormac McCarthy,
";

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write catalog");
    file
}

fn load_sample() -> IndexedCorpus {
    let file = write_catalog(GOODREADS_SAMPLE);
    let items = CsvCatalogReader::new()
        .with_title_column("Book")
        .with_description_column("Description")
        .read_path(file.path())
        .expect("valid catalog");
    IndexedCorpus::build(items).expect("catalog is not empty")
}

#[test]
fn csv_catalog_end_to_end() {
    let corpus = load_sample();
    assert_eq!(corpus.len(), 5);

    let titles = recommend(&corpus, "Dune", 1).expect("Dune exists");
    assert_eq!(titles, vec!["Children of Dune"]);

    let titles = recommend(&corpus, "Emma", 1).expect("Emma exists");
    assert_eq!(titles, vec!["Persuasion"]);
}

#[test]
fn missing_description_row_is_indexed_as_zero_vector() {
    let corpus = load_sample();
    let anchor = corpus.position("The Road").expect("The Road exists");
    assert_eq!(corpus.items()[anchor].description, "");
    assert_eq!(corpus.similarity(anchor, anchor), Some(0.0));

    let ranked = recommend_scored(&corpus, "The Road", 10).expect("The Road exists");
    let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(ranked.iter().all(|r| r.score == 0.0));
}

#[test]
fn default_top_k_caps_at_catalog_size() {
    let corpus = load_sample();
    let titles = recommend_default(&corpus, "Dune").expect("Dune exists");
    assert_eq!(titles.len(), 4);
    assert!(!titles.contains(&"Dune".to_string()));
}

#[test]
fn not_found_is_distinct_from_empty_result() {
    let corpus = IndexedCorpus::build(vec![Item::with_description("Solo", "lonely lighthouse")])
        .expect("catalog is not empty");

    let empty = recommend(&corpus, "Solo", 10).expect("Solo exists");
    assert!(empty.is_empty());

    let err = recommend(&corpus, "Duo", 10).expect_err("Duo does not exist");
    assert!(matches!(err, RecommendError::TitleNotFound { .. }));

    let err = recommend(&corpus, "", 10).expect_err("blank query");
    assert!(err.is_not_found());
}

#[test]
fn header_only_csv_cannot_be_indexed() {
    let file = write_catalog("title,description\n");
    let items = CsvCatalogReader::new()
        .read_path(file.path())
        .expect("valid catalog");
    let err = IndexedCorpus::build(items).expect_err("empty catalog");
    assert!(matches!(err, RecommendError::EmptyCorpus));
}

#[test]
fn stop_words_can_be_kept() {
    let catalog = vec![
        Item::with_description("X", "the harbor"),
        Item::with_description("Y", "the meadow"),
        Item::with_description("Z", "quiet meadow"),
    ];

    let default = IndexedCorpus::build(catalog.clone()).expect("catalog is not empty");
    assert_eq!(default.similarity(0, 1), Some(0.0));

    let config = IndexConfig::default().with_stop_words(false);
    let keep = IndexedCorpus::build_with(catalog, &config).expect("catalog is not empty");
    assert!(keep.similarity(0, 1).expect("in range") > 0.0);
    assert!(keep.vocabulary().contains_key("the"));
}
