use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that drive a single cleanup run.
///
/// `target_folder` must already be absolute; resolving relative paths
/// and `~` is the configuration layer's job. A policy is never mutated
/// after it reaches the cleaner; build a fresh value per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupPolicy {
    /// Absolute path of the folder to clean.
    pub target_folder: PathBuf,
    /// Move deletions to the OS recycle bin instead of removing them
    /// permanently.
    pub route_to_recycle_bin: bool,
    /// Delete the folder as a unit instead of just its children.
    pub delete_folder_itself: bool,
    /// Recreate an empty folder at the target path after deleting it
    /// (also creates the folder when it was missing to begin with).
    pub recreate_folder_after_delete: bool,
    /// Empty the recycle bin once the folder cleanup finished.
    pub flush_recycle_bin_after: bool,
    /// Suppress confirmation prompts and progress UI during the flush
    /// where the OS would otherwise show them.
    pub silent_flush: bool,
}

impl CleanupPolicy {
    /// Policy with the stock defaults: permanently delete the folder's
    /// contents, keep the folder, flush the recycle bin afterwards.
    pub fn new(target_folder: impl Into<PathBuf>) -> Self {
        Self {
            target_folder: target_folder.into(),
            route_to_recycle_bin: false,
            delete_folder_itself: false,
            recreate_folder_after_delete: true,
            flush_recycle_bin_after: true,
            silent_flush: false,
        }
    }
}
