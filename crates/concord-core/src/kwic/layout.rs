//! Match rows and column justification

use crate::table::{DocumentTable, Value};
use serde::Serialize;

/// Literal separator emitted between the context columns
pub const SEPARATOR: &str = "|";

/// Fixed leading columns of every match table
pub const LEADING_COLUMNS: [&str; 5] = ["pre", "sep_left", "target", "sep_right", "post"];

/// A window that passed both keyword filters, before justification
#[derive(Debug, Clone)]
pub(crate) struct RawMatch {
    pub document: usize,
    pub metadata: Vec<Value>,
    pub words: Vec<String>,
}

/// One keyword occurrence with its context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KwicRow {
    /// Left context, right-justified
    pub pre: String,
    /// Center token, center-justified
    pub target: String,
    /// Right context, left-justified
    pub post: String,
    /// Metadata of the source document, text column excluded
    pub metadata: Vec<Value>,
    /// Raw window tokens `word1..wordW`
    pub words: Vec<String>,
    /// Zero-based index of the source document
    pub document: usize,
}

impl KwicRow {
    /// The unpadded center token
    pub fn center_word(&self) -> &str {
        &self.words[self.words.len() / 2]
    }
}

/// Result of a KWIC extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTable {
    window: usize,
    metadata_columns: Vec<String>,
    rows: Vec<KwicRow>,
}

impl MatchTable {
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn metadata_columns(&self) -> &[String] {
        &self.metadata_columns
    }

    pub fn rows(&self) -> &[KwicRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KwicRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Full column schema, present even when there are no rows
    pub fn columns(&self) -> Vec<String> {
        LEADING_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.metadata_columns.iter().cloned())
            .chain((1..=self.window).map(|i| format!("word{}", i)))
            .collect()
    }

    /// Flatten into a plain table following [`MatchTable::columns`]
    pub fn to_table(&self) -> DocumentTable {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut values = vec![
                    Value::from(row.pre.as_str()),
                    Value::from(SEPARATOR),
                    Value::from(row.target.as_str()),
                    Value::from(SEPARATOR),
                    Value::from(row.post.as_str()),
                ];
                values.extend(row.metadata.iter().cloned());
                values.extend(row.words.iter().map(|w| Value::from(w.as_str())));
                values
            })
            .collect();
        DocumentTable::from_parts(self.columns(), rows)
    }
}

impl<'a> IntoIterator for &'a MatchTable {
    type Item = &'a KwicRow;
    type IntoIter = std::slice::Iter<'a, KwicRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Split each window around its center and pad every column to the widest
/// value in the whole result set.
pub(crate) fn justify(
    window: usize,
    metadata_columns: Vec<String>,
    matches: Vec<RawMatch>,
) -> MatchTable {
    let center = window / 2;

    let parts: Vec<(String, String, String, RawMatch)> = matches
        .into_iter()
        .map(|m| {
            let pre = m.words[..center].join(" ");
            let target = m.words[center].clone();
            let post = m.words[center + 1..].join(" ");
            (pre, target, post, m)
        })
        .collect();

    let pre_width = max_width(parts.iter().map(|p| p.0.as_str()));
    let target_width = max_width(parts.iter().map(|p| p.1.as_str()));
    let post_width = max_width(parts.iter().map(|p| p.2.as_str()));

    let rows = parts
        .into_iter()
        .map(|(pre, target, post, m)| KwicRow {
            pre: format!("{:>width$}", pre, width = pre_width),
            target: format!("{:^width$}", target, width = target_width),
            post: format!("{:<width$}", post, width = post_width),
            metadata: m.metadata,
            words: m.words,
            document: m.document,
        })
        .collect();

    MatchTable {
        window,
        metadata_columns,
        rows,
    }
}

fn max_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}
