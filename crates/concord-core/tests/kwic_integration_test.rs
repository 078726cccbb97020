//! Integration tests for keyword-in-context extraction
//!
//! Covers the concrete Hamlet scenario, metadata carry-through, schema of
//! empty results and loading documents from disk before extraction.

use concord_core::{
    extract_kwic, extract_kwic_with, load_path, ConcordError, DocumentTable, KwicOptions,
    MatchMode, Value,
};
use std::fs;
use tempfile::TempDir;

const HAMLET: &str = "To be, or not to be: that is the question.";

fn corpus() -> DocumentTable {
    DocumentTable::from_records(vec![
        vec![
            ("speaker", Value::from("Hamlet")),
            ("text", Value::from(HAMLET)),
            ("act", Value::Integer(3)),
        ],
        vec![
            ("speaker", Value::from("Polonius")),
            (
                "text",
                Value::from("Neither a borrower nor a lender be; For loan oft loses both itself and friend"),
            ),
            ("act", Value::Integer(1)),
        ],
        vec![
            ("speaker", Value::from("Horatio")),
            ("text", Value::from("short")),
            ("act", Value::Integer(5)),
        ],
    ])
}

#[test]
fn test_hamlet_scenario_exact_rows() {
    let table = DocumentTable::from_records(vec![vec![("text", Value::from(HAMLET))]]);
    let result = extract_kwic(&table, "be", 6).unwrap();

    // Of the five 6-token windows only [or not to be: that is] has "be" at word4
    assert_eq!(result.len(), 1);
    let row = &result.rows()[0];
    assert_eq!(row.pre, "or not to");
    assert_eq!(row.target, "be:");
    assert_eq!(row.post, "that is");
    assert_eq!(row.words, vec!["or", "not", "to", "be:", "that", "is"]);

    let flat = result.to_table();
    assert_eq!(
        flat.columns(),
        &[
            "pre",
            "sep_left",
            "target",
            "sep_right",
            "post",
            "word1",
            "word2",
            "word3",
            "word4",
            "word5",
            "word6"
        ]
    );
    assert_eq!(flat.rows()[0][1], Value::from("|"));
    assert_eq!(flat.rows()[0][3], Value::from("|"));
}

#[test]
fn test_metadata_carried_through_and_padded_globally() {
    let result = extract_kwic(&corpus(), "be", 6).unwrap();

    // Hamlet: [or not to be: that is]; Polonius: [nor a lender be; For loan]
    assert_eq!(result.len(), 2);
    assert_eq!(result.metadata_columns(), &["speaker", "act"]);

    let hamlet = &result.rows()[0];
    assert_eq!(hamlet.metadata, vec![Value::from("Hamlet"), Value::Integer(3)]);
    assert_eq!(hamlet.document, 0);

    let polonius = &result.rows()[1];
    assert_eq!(polonius.metadata, vec![Value::from("Polonius"), Value::Integer(1)]);
    assert_eq!(polonius.center_word(), "be;");
    assert_eq!(polonius.pre, "nor a lender");
    assert_eq!(hamlet.pre, "   or not to");
    assert_eq!(polonius.post, "For loan");
    assert_eq!(hamlet.post, "that is ");
    assert_eq!(hamlet.target, "be:");
}

#[test]
fn test_no_matches_keeps_schema() {
    let result = extract_kwic(&corpus(), "Ophelia", 4).unwrap();

    assert!(result.is_empty());
    assert_eq!(
        result.columns(),
        vec![
            "pre",
            "sep_left",
            "target",
            "sep_right",
            "post",
            "speaker",
            "act",
            "word1",
            "word2",
            "word3",
            "word4"
        ]
    );
}

#[test]
fn test_validation_happens_before_processing() {
    let table = DocumentTable::new(["speaker"]);
    assert!(matches!(
        extract_kwic(&table, "be", 6),
        Err(ConcordError::Schema(_))
    ));

    assert!(matches!(
        extract_kwic(&corpus(), "", 6),
        Err(ConcordError::InvalidArgument(_))
    ));

    let options = KwicOptions::new("(").with_mode(MatchMode::Regex);
    assert!(matches!(
        extract_kwic_with(&corpus(), &options),
        Err(ConcordError::InvalidArgument(_))
    ));
}

#[test]
fn test_load_csv_then_extract() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lines.csv");
    fs::write(
        &path,
        "id,speaker,text\n1,Hamlet,\"To be, or not to be: that is the question.\"\n2,Gertrude,The lady doth protest too much methinks\n",
    )
    .unwrap();

    let table = load_path(&path).unwrap();
    let result = extract_kwic(&table, "protest", 4).unwrap();

    assert_eq!(result.len(), 1);
    let row = &result.rows()[0];
    assert_eq!(row.metadata, vec![Value::from("2"), Value::from("Gertrude")]);
    assert_eq!(row.pre, "lady doth");
    assert_eq!(row.target, "protest");
    assert_eq!(row.post, "too");
}

#[test]
fn test_load_text_directory_then_extract() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "the quick brown fox jumps").unwrap();
    fs::write(temp.path().join("b.txt"), "a lazy brown dog sleeps").unwrap();

    let table = load_path(temp.path()).unwrap();
    let result = extract_kwic(&table, "brown", 2).unwrap();

    let files: Vec<_> = result.iter().map(|r| r.metadata[1].clone()).collect();
    assert_eq!(files, vec![Value::from("a.txt"), Value::from("b.txt")]);
    assert_eq!(result.rows()[0].pre, "quick");
    assert_eq!(result.rows()[1].pre, " lazy");
}

#[test]
fn test_load_missing_path() {
    let temp = TempDir::new().unwrap();
    let err = load_path(temp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ConcordError::NotFound(_)));
}
