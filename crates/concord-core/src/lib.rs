//! Concord Core Library
//!
//! Keyword-in-context (KWIC) extraction over tables of documents.
//!
//! # Features
//! - Sliding token windows centred on a keyword, with justified context
//! - Literal or regex keywords, optionally case-insensitive
//! - Metadata columns carried through to every match
//! - Document loading from CSV, JSON / JSON Lines and plain-text directories
//! - YAML configuration with environment overrides

pub mod config;
pub mod error;
pub mod kwic;
pub mod providers;
pub mod table;

pub use config::Config;
pub use error::{ConcordError, Error, Result};
pub use kwic::{
    extract_kwic, extract_kwic_with, KeywordMatcher, KwicOptions, KwicRow, MatchMode, MatchTable,
    DEFAULT_WINDOW,
};
pub use providers::{
    load_path, CSVProvider, FileProvider, JSONProvider, ProviderConfig, ProviderRegistry,
    SourceProvider,
};
pub use table::{DocumentTable, Value, DEFAULT_TEXT_COLUMN};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "concord";
