//! Keyword-in-context extraction
//!
//! Slides a fixed-size token window over every document and reports each
//! window whose center token contains the keyword. Left and right context
//! are justified across the whole result set so the keyword column lines up.

mod layout;
mod matcher;
mod ngram;

pub use layout::{KwicRow, MatchTable, LEADING_COLUMNS, SEPARATOR};
pub use matcher::{KeywordMatcher, MatchMode};
pub use ngram::{candidate_count, ngrams, normalize_window, tokenize};

use crate::error::{ConcordError, Result};
use crate::table::{DocumentTable, Value, DEFAULT_TEXT_COLUMN};
use layout::RawMatch;
use std::borrow::Cow;

/// Window size used when the caller does not pick one
pub const DEFAULT_WINDOW: usize = 6;

/// Options controlling an extraction
#[derive(Debug, Clone, PartialEq)]
pub struct KwicOptions {
    /// Keyword or pattern to center on
    pub keyword: String,

    /// Tokens per window; odd values are rounded up
    pub window: usize,

    /// Column holding the document body
    pub text_column: String,

    pub mode: MatchMode,

    pub ignore_case: bool,
}

impl KwicOptions {
    /// Options with defaults for everything but the keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            window: DEFAULT_WINDOW,
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            mode: MatchMode::Literal,
            ignore_case: false,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// Extract keyword-in-context rows with a literal, case-sensitive keyword
/// from the `text` column.
///
/// # Errors
///
/// [`ConcordError::Schema`] if the table has no `text` column,
/// [`ConcordError::InvalidArgument`] for an empty keyword or a zero window.
///
/// # Example
///
/// ```
/// use concord_core::{extract_kwic, DocumentTable, Value};
///
/// let mut table = DocumentTable::new(["text"]);
/// table
///     .push_row(vec![Value::from("To be, or not to be: that is the question.")])
///     .unwrap();
///
/// let matches = extract_kwic(&table, "be", 6).unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches.rows()[0].target, "be:");
/// ```
pub fn extract_kwic(table: &DocumentTable, keyword: &str, window: usize) -> Result<MatchTable> {
    extract_kwic_with(table, &KwicOptions::new(keyword).with_window(window))
}

/// Extract keyword-in-context rows with the full option set.
///
/// All validation happens before any document is processed; once it passes
/// the extraction cannot fail.
pub fn extract_kwic_with(table: &DocumentTable, options: &KwicOptions) -> Result<MatchTable> {
    let window = normalize_window(options.window)?;
    let matcher = KeywordMatcher::new(&options.keyword, options.mode, options.ignore_case)?;
    let text_idx = table.column_index(&options.text_column).ok_or_else(|| {
        ConcordError::Schema(format!(
            "required column '{}' not found (columns: {})",
            options.text_column,
            table.columns().join(", ")
        ))
    })?;
    table.check_shape()?;

    if window != options.window {
        tracing::debug!("Window {} rounded up to {}", options.window, window);
    }

    let metadata_idx: Vec<usize> = (0..table.columns().len())
        .filter(|&i| i != text_idx)
        .collect();
    let metadata_columns = metadata_idx
        .iter()
        .map(|&i| table.columns()[i].clone())
        .collect();

    let center = window / 2;
    let mut candidates = 0usize;
    let mut matches = Vec::new();

    for (document, row) in table.rows().iter().enumerate() {
        let text = document_text(&row[text_idx]);
        let tokens = tokenize(&text);

        for gram in ngrams(&tokens, window) {
            candidates += 1;

            if !matcher.is_match(&gram.join(" ")) {
                continue;
            }
            if !matcher.is_match(gram[center]) {
                continue;
            }

            matches.push(RawMatch {
                document,
                metadata: metadata_idx.iter().map(|&i| row[i].clone()).collect(),
                words: gram.iter().map(|w| w.to_string()).collect(),
            });
        }
    }

    tracing::debug!(
        "KWIC '{}': {} documents, {} windows, {} matches",
        options.keyword,
        table.len(),
        candidates,
        matches.len()
    );

    Ok(layout::justify(window, metadata_columns, matches))
}

/// Body of a document; missing text has no tokens
fn document_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Text(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}
