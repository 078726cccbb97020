//! Keyword-in-context command

use crate::app::{KwicArgs, OutputFormat};
use crate::output::{format_matches, FormatOptions};
use anyhow::Result;
use concord_core::{
    extract_kwic_with, Config, KwicOptions, MatchMode, ProviderConfig, ProviderRegistry,
};

pub fn run(args: KwicArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let options = build_options(&args, config);

    let mut provider_config = ProviderConfig::new(&args.input);
    if let Some(pattern) = args.pattern.as_ref().or(config.pattern.as_ref()) {
        provider_config = provider_config.with_pattern(pattern.as_str());
    }
    if let Some(ref delimiter) = args.delimiter {
        provider_config = provider_config.with_option("delimiter", delimiter.as_str());
    }
    if args.lines {
        provider_config = provider_config.with_option("lines", "true");
    }

    let registry = ProviderRegistry::with_defaults();
    let table = registry.load(&provider_config, args.source.map(|s| s.as_str()))?;
    let matches = extract_kwic_with(&table, &options)?;

    if matches.is_empty() && format == OutputFormat::Cli {
        eprintln!("No matches for '{}'", options.keyword);
    }

    let format_opts = FormatOptions {
        show_metadata: args.show_metadata,
    };

    print!("{}", format_matches(&matches, format, &format_opts)?);
    Ok(())
}

/// Config values, overridden by whatever the command line sets
fn build_options(args: &KwicArgs, config: &Config) -> KwicOptions {
    let mut options = config.to_options(args.keyword.clone());

    if let Some(window) = args.window {
        options.window = window;
    }
    if let Some(ref column) = args.text_column {
        options.text_column = column.clone();
    }
    if args.regex {
        options.mode = MatchMode::Regex;
    }
    if args.ignore_case {
        options.ignore_case = true;
    }

    options
}
