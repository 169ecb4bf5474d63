use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

pub mod config;
pub mod listener;

use config::{CleanerConfig, load_config};

#[derive(Parser)]
#[command(name = "hotsweep")]
#[command(about = "Hotkey-triggered folder cleaner")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration JSON file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Override the folder configured in the JSON file
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Override the configured hotkey (for example, 'ctrl+alt+f')
    #[arg(long)]
    pub hotkey: Option<String>,

    /// Permanently delete files instead of sending them to the recycle bin
    #[arg(long)]
    pub permanent: bool,

    /// Do not empty the recycle bin after deleting the folder
    #[arg(long)]
    pub no_recycle_empty: bool,

    /// Delete the folder itself instead of just its contents
    #[arg(long)]
    pub delete_folder: bool,

    /// Do not recreate the folder after deleting it
    #[arg(long)]
    pub no_recreate: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Set up the log level
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "hotsweep={log_level},hotsweep_core={log_level},hotsweep_cli={log_level}"
        ))
        .init();

    let config = load_config(&cli.config)?;
    let config = apply_overrides(config, &cli)?;

    listener::start_hotkey_listener(config)
}

/// Command-line flags win over the values from the configuration file.
pub fn apply_overrides(mut config: CleanerConfig, cli: &Cli) -> Result<CleanerConfig> {
    if let Some(folder) = &cli.folder {
        if folder.as_os_str().is_empty() {
            bail!("--folder requires a non-empty path.");
        }
        config.folder = config::resolve_folder(folder.clone());
    }
    if let Some(hotkey) = &cli.hotkey {
        config.hotkey = hotkey.clone();
    }
    if cli.permanent {
        config.send_to_recycle_bin = false;
    }
    if cli.no_recycle_empty {
        config.empty_recycle_bin = false;
    }
    if cli.delete_folder {
        config.delete_folder_itself = true;
    }
    if cli.no_recreate {
        config.recreate_folder = false;
    }
    Ok(config)
}
