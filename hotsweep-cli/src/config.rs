use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use hotsweep_core::CleanupPolicy;

/// Settings that drive the cleaner hotkey application, as stored in the
/// configuration JSON file. Every field except `folder` has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    pub folder: PathBuf,
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    #[serde(default)]
    pub send_to_recycle_bin: bool,
    #[serde(default = "default_true")]
    pub empty_recycle_bin: bool,
    #[serde(default)]
    pub delete_folder_itself: bool,
    #[serde(default = "default_true")]
    pub recreate_folder: bool,
    #[serde(default)]
    pub suppress_notifications: bool,
}

fn default_hotkey() -> String {
    "ctrl+alt+delete".to_string()
}

fn default_true() -> bool {
    true
}

impl CleanerConfig {
    /// Convert into the immutable policy value the core consumes.
    pub fn into_policy(self) -> CleanupPolicy {
        CleanupPolicy {
            target_folder: self.folder,
            route_to_recycle_bin: self.send_to_recycle_bin,
            delete_folder_itself: self.delete_folder_itself,
            recreate_folder_after_delete: self.recreate_folder,
            flush_recycle_bin_after: self.empty_recycle_bin,
            silent_flush: self.suppress_notifications,
        }
    }
}

/// Load configuration from `path`.
///
/// The configured folder is made absolute here so the core never sees a
/// relative path.
pub fn load_config(path: &Path) -> Result<CleanerConfig> {
    if !path.exists() {
        bail!("Configuration file '{}' was not found.", path.display());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'", path.display()))?;

    let mut config: CleanerConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Configuration file '{}' is not valid JSON", path.display()))?;

    if config.folder.as_os_str().is_empty() {
        bail!(
            "Configuration file '{}' has an empty 'folder' value.",
            path.display()
        );
    }

    config.folder = resolve_folder(config.folder);
    debug!("Loaded configuration: {config:?}");
    Ok(config)
}

/// Expand a leading `~` and anchor relative paths at the current
/// working directory.
///
/// Callers must reject empty paths first: joining an empty path onto
/// the working directory would silently aim the cleanup at the cwd.
pub(crate) fn resolve_folder(folder: PathBuf) -> PathBuf {
    let folder = expand_home(folder);
    if folder.is_absolute() {
        return folder;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(folder),
        Err(_) => folder,
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return if rest.as_os_str().is_empty() {
                home
            } else {
                home.join(rest)
            };
        }
    }
    path
}
