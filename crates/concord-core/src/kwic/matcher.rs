//! Keyword matching against tokens and token windows

use crate::error::{ConcordError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a keyword is compared against text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-sensitive substring containment
    #[default]
    Literal,
    /// The keyword is a regular expression
    Regex,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Literal => f.write_str("literal"),
            MatchMode::Regex => f.write_str("regex"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = ConcordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(MatchMode::Literal),
            "regex" => Ok(MatchMode::Regex),
            other => Err(ConcordError::InvalidArgument(format!(
                "unknown match mode '{}'. Expected: literal or regex",
                other
            ))),
        }
    }
}

/// Compiled keyword
#[derive(Debug, Clone)]
pub enum KeywordMatcher {
    Literal(String),
    Pattern(Regex),
}

impl KeywordMatcher {
    /// Compile a keyword. Case-insensitive literals go through an escaped regex.
    pub fn new(keyword: &str, mode: MatchMode, ignore_case: bool) -> Result<Self> {
        if keyword.is_empty() {
            return Err(ConcordError::InvalidArgument(
                "keyword must not be empty".to_string(),
            ));
        }

        match (mode, ignore_case) {
            (MatchMode::Literal, false) => Ok(Self::Literal(keyword.to_string())),
            (MatchMode::Literal, true) => compile(&regex::escape(keyword), true),
            (MatchMode::Regex, ignore_case) => compile(keyword, ignore_case),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Self::Literal(needle) => haystack.contains(needle.as_str()),
            Self::Pattern(re) => re.is_match(haystack),
        }
    }
}

fn compile(pattern: &str, ignore_case: bool) -> Result<KeywordMatcher> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
        .map(KeywordMatcher::Pattern)
        .map_err(|e| {
            ConcordError::InvalidArgument(format!("invalid keyword pattern '{}': {}", pattern, e))
        })
}
