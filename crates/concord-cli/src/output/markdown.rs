//! Markdown output formatter

use super::FormatOptions;
use concord_core::MatchTable;

pub fn format_matches(matches: &MatchTable, options: &FormatOptions) -> String {
    let mut output = String::from("# Keyword in Context\n\n");

    if matches.is_empty() {
        output.push_str("*No matches found*\n");
        return output;
    }

    let mut header = vec!["pre", "target", "post"];
    if options.show_metadata {
        header.extend(matches.metadata_columns().iter().map(|c| c.as_str()));
    }

    output.push_str(&format!("| {} |\n", header.join(" | ")));
    output.push_str(&format!("|{}\n", " --- |".repeat(header.len())));

    for row in matches {
        let mut cells = vec![
            escape_cell(row.pre.trim()),
            format!("**{}**", escape_cell(row.target.trim())),
            escape_cell(row.post.trim()),
        ];
        if options.show_metadata {
            cells.extend(row.metadata.iter().map(|v| escape_cell(&v.to_string())));
        }
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    output
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
