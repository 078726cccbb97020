//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use concord_core::MatchTable;

/// Format options
pub struct FormatOptions {
    /// Append metadata to terminal and markdown lines
    pub show_metadata: bool,
}

/// Format a match table
pub fn format_matches(
    matches: &MatchTable,
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => json::format_matches(matches, options),
        OutputFormat::Csv => csv::format_matches(matches)?,
        OutputFormat::Md => markdown::format_matches(matches, options),
        OutputFormat::Cli => terminal::format_matches(matches, options),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_core::{extract_kwic, DocumentTable, Value};

    fn sample() -> MatchTable {
        let table = DocumentTable::from_records(vec![
            vec![
                ("speaker", Value::from("Hamlet")),
                ("text", Value::from("To be, or not to be: that is the question.")),
            ],
            vec![
                ("speaker", Value::from("Gertrude")),
                ("text", Value::from("The lady doth protest too much, methinks")),
            ],
        ]);
        extract_kwic(&table, "t", 2).unwrap()
    }

    #[test]
    fn test_terminal_lines_align_on_target() {
        let matches = sample();
        let output = format_matches(
            &matches,
            OutputFormat::Cli,
            &FormatOptions {
                show_metadata: false,
            },
        )
        .unwrap();

        let bars: Vec<usize> = output
            .lines()
            .map(|line| line.find(" | ").unwrap())
            .collect();
        assert_eq!(output.lines().count(), matches.len());
        assert!(bars.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_terminal_metadata_suffix() {
        let output = format_matches(
            &sample(),
            OutputFormat::Cli,
            &FormatOptions {
                show_metadata: true,
            },
        )
        .unwrap();
        assert!(output.contains("[speaker=Hamlet]"));
        assert!(output.contains("[speaker=Gertrude]"));
    }

    #[test]
    fn test_csv_header_for_empty_result() {
        let table = DocumentTable::from_records(vec![vec![
            ("id", Value::Integer(1)),
            ("text", Value::from("nothing here")),
        ]]);
        let matches = extract_kwic(&table, "absent", 2).unwrap();
        let output = format_matches(
            &matches,
            OutputFormat::Csv,
            &FormatOptions {
                show_metadata: false,
            },
        )
        .unwrap();
        assert_eq!(output, "pre,sep_left,target,sep_right,post,id,word1,word2\n");
    }

    #[test]
    fn test_json_nests_metadata() {
        let output = format_matches(
            &sample(),
            OutputFormat::Json,
            &FormatOptions {
                show_metadata: false,
            },
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["metadata"]["speaker"], "Hamlet");
        assert_eq!(parsed[0]["document"], 0);
        assert!(parsed[0]["words"].is_array());
    }

    #[test]
    fn test_markdown_empty() {
        let table = DocumentTable::from_records(vec![vec![("text", Value::from("a b"))]]);
        let matches = extract_kwic(&table, "zzz", 2).unwrap();
        let output = format_matches(
            &matches,
            OutputFormat::Md,
            &FormatOptions {
                show_metadata: false,
            },
        )
        .unwrap();
        assert!(output.contains("*No matches found*"));
    }
}
