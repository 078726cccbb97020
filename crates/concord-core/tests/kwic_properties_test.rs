//! Property tests for keyword-in-context extraction

use concord_core::kwic::{candidate_count, tokenize};
use concord_core::{extract_kwic, DocumentTable, Value};
use proptest::prelude::*;

/// Small vocabulary so keywords hit often and windows overlap
fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "be", "to", "not", "or", "maybe", "question", "the", "bee", "Be,", "x",
    ])
    .prop_map(str::to_string)
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..24).prop_map(|words| words.join(" "))
}

fn table_of(texts: &[String]) -> DocumentTable {
    DocumentTable::from_records(texts.iter().enumerate().map(|(i, text)| {
        vec![
            ("text", Value::from(text.as_str())),
            ("doc", Value::Integer(i as i64)),
        ]
    }))
}

proptest! {
    #[test]
    fn odd_window_matches_next_even(
        texts in prop::collection::vec(document(), 1..5),
        half in 0usize..5,
    ) {
        let odd = half * 2 + 1;
        let table = table_of(&texts);
        let a = extract_kwic(&table, "be", odd).unwrap();
        let b = extract_kwic(&table, "be", odd + 1).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_target_contains_keyword(
        texts in prop::collection::vec(document(), 1..5),
        half in 1usize..5,
    ) {
        let table = table_of(&texts);
        let result = extract_kwic(&table, "be", half * 2).unwrap();
        for row in &result {
            prop_assert!(row.target.trim().contains("be"));
            prop_assert_eq!(row.center_word(), row.target.trim());
        }
    }

    #[test]
    fn row_count_is_matching_subset_of_candidates(
        text in document(),
        half in 1usize..5,
    ) {
        let window = half * 2;
        let table = table_of(&[text.clone()]);
        let result = extract_kwic(&table, "be", window).unwrap();

        let tokens = tokenize(&text);
        let candidates = candidate_count(tokens.len(), window);
        let expected = if candidates == 0 {
            0
        } else {
            tokens.windows(window).filter(|w| w[window / 2].contains("be")).count()
        };

        prop_assert!(result.len() <= candidates);
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn metadata_is_preserved(
        texts in prop::collection::vec(document(), 1..5),
    ) {
        let table = table_of(&texts);
        let result = extract_kwic(&table, "be", 4).unwrap();
        for row in &result {
            prop_assert_eq!(&row.metadata, &vec![Value::Integer(row.document as i64)]);
        }
    }

    #[test]
    fn justified_columns_share_width(
        texts in prop::collection::vec(document(), 1..5),
        half in 1usize..5,
    ) {
        let table = table_of(&texts);
        let result = extract_kwic(&table, "be", half * 2).unwrap();
        let width = |s: &str| s.chars().count();

        if let Some(first) = result.rows().first() {
            for row in &result {
                prop_assert_eq!(width(&row.pre), width(&first.pre));
                prop_assert_eq!(width(&row.target), width(&first.target));
                prop_assert_eq!(width(&row.post), width(&first.post));
            }
        }
    }

    #[test]
    fn extraction_is_deterministic(
        texts in prop::collection::vec(document(), 1..5),
    ) {
        let table = table_of(&texts);
        let first = extract_kwic(&table, "be", 6).unwrap();
        let second = extract_kwic(&table, "be", 6).unwrap();
        prop_assert_eq!(first.to_table(), second.to_table());
        prop_assert_eq!(first, second);
    }
}
