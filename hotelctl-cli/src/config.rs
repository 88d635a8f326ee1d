use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hotelctl_core::HotelConfig;
use serde::Serialize;

use crate::protocol::output;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Show the effective configuration and resolved database path
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
struct EffectiveConfig {
    config_file: PathBuf,
    database_path: PathBuf,
    #[serde(flatten)]
    config: HotelConfig,
}

pub fn run_config(args: ConfigArgs, config: &HotelConfig, db_flag: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(config, db_flag),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = HotelConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let content = HotelConfig::default().to_toml()?;
    std::fs::write(&config_path, content)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    output(config_path, |path| {
        println!("✅ Created config at: {:?}", path);
    });
    Ok(())
}

fn run_show(config: &HotelConfig, db_flag: Option<&Path>) -> Result<()> {
    let effective = EffectiveConfig {
        config_file: HotelConfig::config_path(),
        database_path: config.resolve_db_path(db_flag),
        config: config.clone(),
    };

    output(effective, |effective| {
        println!("# {}", effective.config_file.display());
        println!("# database in use: {}", effective.database_path.display());
        match effective.config.to_toml() {
            Ok(toml) => println!("{}", toml),
            Err(err) => eprintln!("❌ {}", err),
        }
    });
    Ok(())
}

fn run_path() -> Result<()> {
    output(HotelConfig::config_path(), |path| {
        println!("{}", path.display());
    });
    Ok(())
}
