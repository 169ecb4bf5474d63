use std::io;
use std::path::PathBuf;

/// Errors surfaced by a cleanup run.
#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    /// Recycle-bin routing was requested on a platform without a trash
    /// facility. Hard stop for that deletion call, never retried.
    #[error("no recycle bin facility is available on this platform; cannot trash '{}'", path.display())]
    RecycleBinUnavailable { path: PathBuf },

    /// A folder's children could not be enumerated.
    #[error("unable to read contents of '{}'", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The OS reported a failure while emptying the recycle bin. The
    /// status code is kept verbatim for diagnostics.
    #[error("emptying the recycle bin failed with status code {code}: {detail}")]
    RecycleBinFlushFailed { code: i32, detail: String },

    /// Moving a single path to the recycle bin failed.
    #[error("failed to move '{}' to the recycle bin", path.display())]
    Trash {
        path: PathBuf,
        #[source]
        source: trash::Error,
    },

    /// Permanent deletion or folder recreation failed.
    #[error("filesystem operation on '{}' failed", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CleanupError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CleanupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_failure_preserves_status_code() {
        let err = CleanupError::RecycleBinFlushFailed {
            code: 5,
            detail: "access denied".to_string(),
        };

        match err {
            CleanupError::RecycleBinFlushFailed { code, .. } => assert_eq!(code, 5),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_display_messages_name_the_path() {
        let err = CleanupError::RecycleBinUnavailable {
            path: PathBuf::from("/tmp/scratch"),
        };
        assert!(err.to_string().contains("/tmp/scratch"));

        let err = CleanupError::unreadable(
            "/tmp/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/locked"));
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        use std::error::Error;

        let err = CleanupError::io(
            "/tmp/gone",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}
