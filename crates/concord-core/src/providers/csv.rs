//! CSV Provider for loading documents row-by-row

use crate::error::{ConcordError, Result};
use crate::providers::{scan_directory, ProviderConfig, SourceProvider};
use crate::table::{DocumentTable, Value};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// Provider for CSV and TSV files
pub struct CSVProvider;

impl Default for CSVProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CSVProvider {
    /// Create a new CSVProvider
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV file; every cell is kept verbatim as text
    fn parse_csv_file(&self, path: &Path, config: &ProviderConfig) -> Result<DocumentTable> {
        let file_content = fs::read_to_string(path).map_err(|e| {
            ConcordError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read CSV file {:?}: {}", path, e),
            ))
        })?;

        let is_tsv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("tsv"))
            .unwrap_or(false);

        let delimiter = match config.get_option("delimiter").map(|s| s.as_str()) {
            Some("\\t") | Some("tab") => b'\t',
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => c as u8,
                    _ => {
                        return Err(ConcordError::InvalidArgument(format!(
                            "CSV delimiter must be a single ASCII character, got '{}'",
                            s
                        )))
                    }
                }
            }
            None if is_tsv => b'\t',
            None => b',',
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(file_content.as_bytes());

        let headers = reader.headers()?.clone();
        let mut table = DocumentTable::new(headers.iter());

        for (row_num, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                ConcordError::Parse(format!(
                    "Failed to parse CSV row {} of {:?}: {}",
                    row_num + 1,
                    path,
                    e
                ))
            })?;

            table.push_row(record.iter().map(Value::from).collect())?;
        }

        Ok(table)
    }
}

impl SourceProvider for CSVProvider {
    fn provider_type(&self) -> &'static str {
        "csv"
    }

    fn load(&self, config: &ProviderConfig) -> Result<DocumentTable> {
        let base_path = config.base_path.as_path();

        if base_path.is_file() {
            return self.parse_csv_file(base_path, config);
        }

        let pattern = config.pattern_or(self.default_pattern());
        let csv_files = scan_directory(base_path, pattern, &["csv", "tsv"], true)?;
        if csv_files.is_empty() {
            tracing::warn!(
                "No CSV files matching '{}' under {}",
                pattern,
                base_path.display()
            );
        }
        let mut table = DocumentTable::default();

        for csv_file in csv_files {
            match self.parse_csv_file(&csv_file, config) {
                Ok(file_table) => table.extend(file_table)?,
                Err(e) => {
                    tracing::warn!("Failed to parse CSV file {:?}: {}", csv_file, e);
                }
            }
        }

        Ok(table)
    }
}
