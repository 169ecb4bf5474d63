pub mod cleaner;
pub mod deleter;
pub mod error;
pub mod policy;
pub mod recycle;
pub mod task;

pub use cleaner::FolderCleaner;
pub use deleter::{delete_path, recycle_bin_available};
pub use error::{CleanupError, Result};
pub use policy::CleanupPolicy;
pub use recycle::{flush_available, flush_recycle_bin};
pub use task::CleanupTask;
