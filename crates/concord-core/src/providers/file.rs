//! File system provider
//!
//! One document per plain-text file, with its relative path and file name as
//! metadata.

use super::{scan_directory, ProviderConfig, SourceProvider};
use crate::error::Result;
use crate::table::{DocumentTable, Value, DEFAULT_TEXT_COLUMN};
use std::path::Path;

/// Extensions picked up when walking a directory
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// File system provider
pub struct FileProvider;

impl FileProvider {
    /// Create new file provider
    pub fn new() -> Self {
        Self
    }

    fn push_file(&self, table: &mut DocumentTable, path: &Path, relative: String) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| relative.clone());

        table.push_row(vec![
            Value::from(relative),
            Value::from(file_name),
            Value::from(content),
        ])
    }
}

impl Default for FileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for FileProvider {
    fn provider_type(&self) -> &'static str {
        "file"
    }

    fn default_pattern(&self) -> &'static str {
        "**/*.txt"
    }

    fn load(&self, config: &ProviderConfig) -> Result<DocumentTable> {
        let root = config.base_path.as_path();
        let mut table = DocumentTable::new(["path", "file", DEFAULT_TEXT_COLUMN]);

        if root.is_file() {
            self.push_file(&mut table, root, root.display().to_string())?;
            return Ok(table);
        }

        let exclude_hidden = config.flag("exclude_hidden", true);

        let pattern = config.pattern_or(self.default_pattern());
        for path in scan_directory(root, pattern, TEXT_EXTENSIONS, exclude_hidden)? {
            let relative = path
                .strip_prefix(root)
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| path.to_string_lossy().to_string());

            self.push_file(&mut table, &path, relative)?;
        }

        Ok(table)
    }
}
