//! # Hotsweep
//!
//! A hotkey-triggered folder cleaner.
//!
//! Hotsweep waits for a configured global hotkey and then deletes the
//! contents of a configured folder (or the folder itself), optionally
//! routing deletions through the operating system's recycle bin and
//! optionally emptying that bin afterwards.
//!
//! ## Usage
//!
//! ### Command Line
//!
//! ```bash
//! # Arm the hotkey described in ./config.json
//! hotsweep
//!
//! # Override the folder and delete permanently
//! hotsweep --folder /tmp/scratch --permanent
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use hotsweep_core::{CleanupPolicy, FolderCleaner};
//!
//! let dir = std::env::temp_dir().join("hotsweep-doc-example");
//! std::fs::create_dir_all(&dir)?;
//!
//! let mut policy = CleanupPolicy::new(&dir);
//! policy.flush_recycle_bin_after = false;
//!
//! FolderCleaner::new(policy).run()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export core functionality
pub use hotsweep_core::*;

// Re-export commonly used types
pub use hotsweep_core::{CleanupError, CleanupPolicy, CleanupTask, FolderCleaner};
