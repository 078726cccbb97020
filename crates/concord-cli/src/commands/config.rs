//! Configuration commands

use crate::app::{ConfigAction, ConfigArgs};
use anyhow::{bail, Result};
use concord_core::Config;
use std::path::Path;

/// Environment overrides apply to `show` only
pub fn run(args: ConfigArgs, mut config: Config, path: &Path) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            config.apply_env()?;
            print!("{}", serde_yaml::to_string(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file {} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
