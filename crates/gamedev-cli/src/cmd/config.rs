use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use gamedev_core::config::{Config, WarnLevel};
use gamedev_core::paths;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,

    /// Validate the config for common mistakes
    Validate,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(config_path: Option<&Path>, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(config_path, json),
        ConfigSubcommand::Validate => validate(config_path, json),
        ConfigSubcommand::Init { force } => init(config_path, force, json),
    }
}

fn resolve(config_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match config_path {
        Some(p) => Ok(p.to_path_buf()),
        None => Ok(paths::default_config_path()?),
    }
}

fn show(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_from(config_path).context("failed to load config")?;
    if json {
        print_json(&config)?;
    } else {
        print!("{}", serde_yaml::to_string(&config)?);
    }
    Ok(())
}

fn validate(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_from(config_path).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }
    Ok(())
}

fn init(config_path: Option<&Path>, force: bool, json: bool) -> anyhow::Result<()> {
    let path = resolve(config_path)?;
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        print_json(&serde_json::json!({ "path": path }))?;
    } else {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
