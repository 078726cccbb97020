//! Document source providers
//!
//! Materialise a [`DocumentTable`] from content on disk:
//! - CSV / TSV files (one document per row)
//! - JSON arrays and JSON Lines (one document per object)
//! - Plain-text files (one document per file)
//!
//! Each provider implements the SourceProvider trait; the registry picks one
//! from the input path when the caller does not name it.

use crate::error::{ConcordError, Result};
use crate::table::DocumentTable;
use glob::Pattern;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::{DirEntry, WalkDir};

pub mod csv;
pub mod file;
pub mod json;

pub use self::csv::CSVProvider;
pub use file::FileProvider;
pub use json::JSONProvider;

/// Directories to exclude from scanning
const EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".cache",
    "vendor",
    "dist",
    "build",
    "__pycache__",
    ".venv",
    "target",
];

/// Source provider trait - all document sources implement this
pub trait SourceProvider: Send + Sync {
    /// Provider type identifier (e.g., "csv", "json", "file")
    fn provider_type(&self) -> &'static str;

    /// Glob used for directory scans when the caller sets none
    fn default_pattern(&self) -> &'static str {
        "**/*"
    }

    /// Load every document under the configured path
    fn load(&self, config: &ProviderConfig) -> Result<DocumentTable>;
}

/// Configuration for a provider instance
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// File or directory to load
    pub base_path: PathBuf,

    /// Glob pattern matched against paths relative to a directory; `None`
    /// defers to the provider's default
    pub pattern: Option<String>,

    /// Provider-specific options (delimiter, lines, ...)
    pub options: HashMap<String, String>,
}

impl ProviderConfig {
    /// Create new provider config
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            pattern: None,
            options: HashMap::new(),
        }
    }

    /// Restrict directory scans to paths matching `pattern`
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// The configured pattern, or `default` when none was set
    pub fn pattern_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.pattern.as_deref().unwrap_or(default)
    }

    /// Add option to config
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get option value
    pub fn get_option(&self, key: &str) -> Option<&String> {
        self.options.get(key)
    }

    /// Boolean option, `default` when unset or unparsable
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.get_option(key)
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(default)
    }
}

/// Registry for managing provider instances
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SourceProvider>>,
}

impl ProviderRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Create registry with default providers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CSVProvider::new()));
        registry.register(Arc::new(JSONProvider::new()));
        registry.register(Arc::new(FileProvider::new()));
        registry
    }

    /// Register a provider
    pub fn register(&mut self, provider: Arc<dyn SourceProvider>) {
        self.providers
            .insert(provider.provider_type().to_string(), provider);
    }

    /// Get provider by type
    pub fn get(&self, provider_type: &str) -> Option<Arc<dyn SourceProvider>> {
        self.providers.get(provider_type).cloned()
    }

    /// Pick a provider from the path: directories go to `file`, files by
    /// extension.
    pub fn detect(&self, path: &Path) -> Result<Arc<dyn SourceProvider>> {
        if !path.exists() {
            return Err(ConcordError::NotFound(format!(
                "Path not found: {}",
                path.display()
            )));
        }

        let provider_type = if path.is_dir() {
            "file"
        } else {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_ascii_lowercase())
                .unwrap_or_default();
            match ext.as_str() {
                "csv" | "tsv" => "csv",
                "json" | "jsonl" | "ndjson" => "json",
                "txt" | "md" | "text" => "file",
                _ => {
                    return Err(ConcordError::Parse(format!(
                        "Cannot detect document format of {}. Use one of: .csv, .tsv, .json, .jsonl, .txt, .md",
                        path.display()
                    )))
                }
            }
        };

        self.get(provider_type).ok_or_else(|| {
            ConcordError::Config(format!("No provider registered for '{}'", provider_type))
        })
    }

    /// Load documents with the named provider, or the detected one
    pub fn load(&self, config: &ProviderConfig, provider_type: Option<&str>) -> Result<DocumentTable> {
        let provider = match provider_type {
            Some(name) => self.get(name).ok_or_else(|| {
                ConcordError::InvalidArgument(format!(
                    "Unknown source '{}'. Expected: csv, json, or file",
                    name
                ))
            })?,
            None => self.detect(&config.base_path)?,
        };

        if !config.base_path.exists() {
            return Err(ConcordError::NotFound(format!(
                "Path not found: {}",
                config.base_path.display()
            )));
        }

        let table = provider.load(config)?;
        tracing::info!(
            "Loaded {} documents from {} via {} provider",
            table.len(),
            config.base_path.display(),
            provider.provider_type()
        );
        Ok(table)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Load documents from a path with the default providers and patterns
pub fn load_path(path: impl AsRef<Path>) -> Result<DocumentTable> {
    let config = ProviderConfig::new(path.as_ref());
    ProviderRegistry::with_defaults().load(&config, None)
}

/// Files under `base_path` whose extension is one of `extensions` and whose
/// relative path matches `pattern`, sorted by path.
pub(crate) fn scan_directory(
    base_path: &Path,
    pattern: &str,
    extensions: &[&str],
    exclude_hidden: bool,
) -> Result<Vec<PathBuf>> {
    let glob_pattern = Pattern::new(pattern)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(base_path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, exclude_hidden))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches_ext = path
            .extension()
            .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
            .unwrap_or(false);
        if !matches_ext {
            continue;
        }

        if let Ok(relative) = path.strip_prefix(base_path) {
            if glob_pattern.matches(&relative.to_string_lossy()) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

fn should_skip(entry: &DirEntry, exclude_hidden: bool) -> bool {
    let name = entry.file_name().to_string_lossy();

    if exclude_hidden && name.starts_with('.') {
        return true;
    }

    entry.file_type().is_dir() && EXCLUDE_DIRS.iter().any(|d| name == *d)
}
