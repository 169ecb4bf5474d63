use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::deleter::delete_path;
use crate::error::{CleanupError, Result};
use crate::policy::CleanupPolicy;
use crate::recycle;

/// Applies one [`CleanupPolicy`] to its target folder.
pub struct FolderCleaner {
    policy: CleanupPolicy,
}

impl FolderCleaner {
    pub fn new(policy: CleanupPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CleanupPolicy {
        &self.policy
    }

    /// One full run: folder cleanup followed by the optional recycle-bin
    /// flush. A flush failure is logged and reported but never undoes or
    /// fails the cleanup that already happened.
    pub fn run(&self) -> Result<()> {
        self.clean()?;

        if self.policy.flush_recycle_bin_after {
            if let Err(err) = recycle::flush_recycle_bin(self.policy.silent_flush) {
                error!("Failed to empty the recycle bin: {err}");
            }
        }

        info!("Cleanup completed.");
        Ok(())
    }

    /// Delete the target folder's contents (or the folder itself)
    /// according to the policy.
    ///
    /// A missing target is not an error: it is logged and, when
    /// recreation is configured, created empty. When deleting contents
    /// child-by-child, the first failing child aborts the remainder of
    /// the run and the error names the child that failed.
    pub fn clean(&self) -> Result<()> {
        let folder = &self.policy.target_folder;

        if !folder.exists() {
            info!("Folder '{}' does not exist; nothing to delete.", folder.display());
            if self.policy.recreate_folder_after_delete {
                debug!("Creating missing folder '{}'.", folder.display());
                fs::create_dir_all(folder).map_err(|err| CleanupError::io(folder, err))?;
            }
            return Ok(());
        }

        info!(
            "Removing {} of '{}'.",
            if self.policy.delete_folder_itself {
                "folder"
            } else {
                "contents"
            },
            folder.display()
        );

        if self.policy.delete_folder_itself {
            delete_path(folder, self.policy.route_to_recycle_bin)?;
            if self.policy.recreate_folder_after_delete {
                debug!("Recreating folder '{}'.", folder.display());
                fs::create_dir_all(folder).map_err(|err| CleanupError::io(folder, err))?;
            }
            return Ok(());
        }

        for child in list_children(folder)? {
            delete_path(&child, self.policy.route_to_recycle_bin)?;
            debug!("Deleted '{}'.", child.display());
        }

        Ok(())
    }
}

/// Immediate children of `folder`, collected before any deletion starts
/// so an unreadable directory fails the run up front.
fn list_children(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(folder).map_err(|source| CleanupError::unreadable(folder, source))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CleanupError::unreadable(folder, source))?;
        children.push(entry.path());
    }
    Ok(children)
}
