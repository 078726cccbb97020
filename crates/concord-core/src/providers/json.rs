//! JSON Provider for loading arrays of objects and JSON Lines

use crate::error::{ConcordError, Result};
use crate::providers::{scan_directory, ProviderConfig, SourceProvider};
use crate::table::{DocumentTable, Value};
use serde_json::Map;
use std::fs;
use std::path::Path;

type Record = Vec<(String, Value)>;

/// Provider for JSON and JSON Lines files
pub struct JSONProvider;

impl Default for JSONProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl JSONProvider {
    /// Create a new JSONProvider
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON file into one record per object
    fn parse_json_file(&self, path: &Path, config: &ProviderConfig) -> Result<Vec<Record>> {
        let file_content = fs::read_to_string(path).map_err(|e| {
            ConcordError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read JSON file {:?}: {}", path, e),
            ))
        })?;

        let lines_ext = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("jsonl") || e.eq_ignore_ascii_case("ndjson"))
            .unwrap_or(false);

        if config.flag("lines", lines_ext) {
            self.parse_lines(&file_content, path)
        } else {
            self.parse_array(&file_content, path)
        }
    }

    /// Top-level array; each item must be an object
    fn parse_array(&self, content: &str, path: &Path) -> Result<Vec<Record>> {
        let json_value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
            ConcordError::Parse(format!("Failed to parse JSON file {:?}: {}", path, e))
        })?;

        match json_value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| self.to_record(item, path, idx + 1))
                .collect(),
            _ => Err(ConcordError::Parse(format!(
                "JSON file {:?} is not an array of objects. Use a .jsonl file or lines=true for JSON Lines",
                path
            ))),
        }
    }

    /// One object per non-blank line
    fn parse_lines(&self, content: &str, path: &Path) -> Result<Vec<Record>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let item: serde_json::Value = serde_json::from_str(line).map_err(|e| {
                    ConcordError::Parse(format!(
                        "Failed to parse line {} of {:?}: {}",
                        idx + 1,
                        path,
                        e
                    ))
                })?;
                self.to_record(item, path, idx + 1)
            })
            .collect()
    }

    fn to_record(&self, item: serde_json::Value, path: &Path, position: usize) -> Result<Record> {
        match item {
            serde_json::Value::Object(obj) => Ok(object_fields(obj)),
            other => Err(ConcordError::Parse(format!(
                "Item {} of {:?} is a {}, expected an object",
                position,
                path,
                json_type_name(&other)
            ))),
        }
    }
}

fn object_fields(obj: Map<String, serde_json::Value>) -> Record {
    obj.into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect()
}

/// Get JSON value type name
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl SourceProvider for JSONProvider {
    fn provider_type(&self) -> &'static str {
        "json"
    }

    fn load(&self, config: &ProviderConfig) -> Result<DocumentTable> {
        let base_path = config.base_path.as_path();

        if base_path.is_file() {
            let records = self.parse_json_file(base_path, config)?;
            return Ok(DocumentTable::from_records(records));
        }

        let pattern = config.pattern_or(self.default_pattern());
        let json_files = scan_directory(base_path, pattern, &["json", "jsonl", "ndjson"], true)?;
        if json_files.is_empty() {
            tracing::warn!(
                "No JSON files matching '{}' under {}",
                pattern,
                base_path.display()
            );
        }
        let mut records = Vec::new();

        for json_file in json_files {
            match self.parse_json_file(&json_file, config) {
                Ok(file_records) => records.extend(file_records),
                Err(e) => {
                    tracing::warn!("Failed to parse JSON file {:?}: {}", json_file, e);
                }
            }
        }

        Ok(DocumentTable::from_records(records))
    }
}
