use tracing::warn;

use crate::error::Result;

/// Whether the OS exposes an "empty the recycle bin" primitive here.
pub fn flush_available() -> bool {
    cfg!(any(
        target_os = "windows",
        all(
            unix,
            not(target_os = "macos"),
            not(target_os = "ios"),
            not(target_os = "android")
        )
    ))
}

/// Permanently purge everything currently in the OS recycle bin.
///
/// `silent` suppresses confirmation prompts and progress UI where the
/// OS would otherwise show them; where the purge primitive has no UI it
/// only trims log chatter. On platforms without a purge facility this
/// is a warning no-op, not a failure: emptying the bin is advisory
/// cleanup, not the primary guarantee.
pub fn flush_recycle_bin(silent: bool) -> Result<()> {
    if !flush_available() {
        warn!("Emptying the recycle bin is not supported on this platform; skipping.");
        return Ok(());
    }

    platform::purge(silent)
}

#[cfg(any(
    target_os = "windows",
    all(
        unix,
        not(target_os = "macos"),
        not(target_os = "ios"),
        not(target_os = "android")
    )
))]
mod platform {
    use tracing::{debug, info};

    use crate::error::{CleanupError, Result};

    pub(super) fn purge(silent: bool) -> Result<()> {
        let items = trash::os_limited::list().map_err(flush_error)?;
        if items.is_empty() {
            debug!("Recycle bin is already empty.");
            return Ok(());
        }

        if !silent {
            info!("Purging {} item(s) from the recycle bin.", items.len());
        }

        trash::os_limited::purge_all(items).map_err(flush_error)?;
        info!("Recycle bin emptied successfully.");
        Ok(())
    }

    /// Keep the OS status code when the purge call reports one.
    fn flush_error(source: trash::Error) -> CleanupError {
        match source {
            trash::Error::Os { code, description } => CleanupError::RecycleBinFlushFailed {
                code,
                detail: description,
            },
            other => CleanupError::RecycleBinFlushFailed {
                code: -1,
                detail: other.to_string(),
            },
        }
    }
}

#[cfg(not(any(
    target_os = "windows",
    all(
        unix,
        not(target_os = "macos"),
        not(target_os = "ios"),
        not(target_os = "android")
    )
)))]
mod platform {
    use crate::error::Result;

    // Unreachable behind the flush_available() check; present so the
    // call site compiles on every target.
    pub(super) fn purge(_silent: bool) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_availability_matches_platform() {
        #[cfg(any(target_os = "windows", target_os = "linux"))]
        assert!(flush_available());

        #[cfg(target_os = "macos")]
        assert!(!flush_available());
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_flush_is_a_no_op_where_unsupported() {
        // Advisory cleanup: never an error on platforms without the
        // purge primitive.
        assert!(flush_recycle_bin(true).is_ok());
    }
}
