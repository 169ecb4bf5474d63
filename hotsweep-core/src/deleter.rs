use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::{CleanupError, Result};

/// Whether this build carries a working "send to trash" facility.
pub fn recycle_bin_available() -> bool {
    cfg!(any(
        target_os = "windows",
        target_os = "macos",
        all(unix, not(target_os = "ios"), not(target_os = "android"))
    ))
}

/// Delete one filesystem entry.
///
/// With `route_to_recycle_bin` the entry is moved to the OS recycle bin;
/// otherwise directories are removed recursively and files and symlinks
/// are removed as single entries. A symlink is always deleted as the
/// link itself, never by descending into its target. Deleting a path
/// that is already gone is a no-op, so races with concurrent removals
/// do not raise.
pub fn delete_path(path: &Path, route_to_recycle_bin: bool) -> Result<()> {
    delete_path_with_availability(path, route_to_recycle_bin, recycle_bin_available())
}

/// Same as [`delete_path`], with the trash-facility capability passed in
/// so the unavailable branch stays reachable on platforms that always
/// ship one.
fn delete_path_with_availability(
    path: &Path,
    route_to_recycle_bin: bool,
    recycle_bin_available: bool,
) -> Result<()> {
    if route_to_recycle_bin {
        if !recycle_bin_available {
            return Err(CleanupError::RecycleBinUnavailable {
                path: path.to_path_buf(),
            });
        }
        return send_to_recycle_bin(path);
    }

    // symlink_metadata so a link to a directory is treated as a link.
    let file_type = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata.file_type(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("'{}' is already gone; nothing to delete.", path.display());
            return Ok(());
        }
        Err(err) => return Err(CleanupError::io(path, err)),
    };

    let removed = if file_type.is_dir() {
        debug!("Recursively deleting directory '{}'.", path.display());
        fs::remove_dir_all(path)
    } else {
        debug!("Deleting file '{}'.", path.display());
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(CleanupError::io(path, err)),
    }
}

fn send_to_recycle_bin(path: &Path) -> Result<()> {
    debug!("Sending '{}' to the recycle bin.", path.display());
    trash::delete(path).map_err(|source| CleanupError::Trash {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_delete_single_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "contents")?;

        delete_path(&file, false)?;
        assert!(!file.exists());

        Ok(())
    }

    #[test]
    fn test_delete_directory_recursively() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let dir = temp_dir.path().join("sub");
        fs::create_dir_all(dir.join("nested"))?;
        fs::write(dir.join("nested").join("file.txt"), "contents")?;

        delete_path(&dir, false)?;
        assert!(!dir.exists());

        Ok(())
    }

    #[test]
    fn test_delete_missing_path_is_a_no_op() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("never-existed");

        delete_path(&missing, false)?;
        delete_path(&missing, false)?;

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_deleted_as_a_link() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let target = temp_dir.path().join("target");
        fs::create_dir_all(&target)?;
        fs::write(target.join("precious.txt"), "keep me")?;

        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link)?;

        delete_path(&link, false)?;

        assert!(link.symlink_metadata().is_err());
        assert!(target.join("precious.txt").exists());

        Ok(())
    }

    #[test]
    fn test_routing_without_a_trash_facility_leaves_the_target_untouched() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "contents")?;

        let err = delete_path_with_availability(&file, true, false).unwrap_err();

        assert!(matches!(err, CleanupError::RecycleBinUnavailable { .. }));
        assert!(file.exists());

        Ok(())
    }

    #[test]
    fn test_recycle_bin_availability_matches_platform() {
        // All tier-one desktop targets ship a trash facility.
        #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
        assert!(recycle_bin_available());
    }
}
