//! Terminal output formatter

use super::FormatOptions;
use concord_core::MatchTable;

pub fn format_matches(matches: &MatchTable, options: &FormatOptions) -> String {
    let mut output = String::new();

    for row in matches {
        let line = format!("{} | {} | {}", row.pre, row.target, row.post);

        if options.show_metadata && !row.metadata.is_empty() {
            let fields: Vec<String> = matches
                .metadata_columns()
                .iter()
                .zip(&row.metadata)
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            output.push_str(&format!("{}  [{}]\n", line, fields.join(" ")));
        } else {
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}
