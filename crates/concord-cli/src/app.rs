//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concord")]
#[command(
    author,
    version,
    about = "Keyword-in-context concordance lines for your documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(long, global = true, env = "CONCORD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every occurrence of a keyword in context
    Kwic(KwicArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct KwicArgs {
    /// Keyword (or pattern with --regex) to center on
    pub keyword: String,

    /// CSV, TSV, JSON, JSON Lines or text file, or a directory of text files
    pub input: PathBuf,

    /// Tokens per window; odd values are rounded up
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Column holding the document text
    #[arg(long)]
    pub text_column: Option<String>,

    /// Treat the keyword as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Match case-insensitively
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Glob pattern for files when INPUT is a directory
    #[arg(long)]
    pub pattern: Option<String>,

    /// Document format, detected from INPUT when omitted
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Field delimiter for CSV input
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Read JSON input as one object per line
    #[arg(long)]
    pub lines: bool,

    /// Print metadata columns next to each line
    #[arg(long)]
    pub show_metadata: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Csv,
    Json,
    File,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Csv => "csv",
            SourceKind::Json => "json",
            SourceKind::File => "file",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
