//! JSON output formatter

use super::FormatOptions;
use concord_core::MatchTable;

pub fn format_matches(matches: &MatchTable, _options: &FormatOptions) -> String {
    let output: Vec<serde_json::Value> = matches
        .iter()
        .map(|row| {
            let metadata: serde_json::Map<String, serde_json::Value> = matches
                .metadata_columns()
                .iter()
                .cloned()
                .zip(row.metadata.iter().map(serde_json::Value::from))
                .collect();

            serde_json::json!({
                "document": row.document,
                "pre": row.pre,
                "target": row.target,
                "post": row.post,
                "metadata": metadata,
                "words": row.words,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
