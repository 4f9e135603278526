use std::path::PathBuf;

use crate::domain::AppError;

/// Port for allocating a unique working directory.
pub trait ScratchDirPort {
    /// Create a new, empty directory whose name starts with `prefix`.
    ///
    /// The directory outlives the call; callers own its cleanup.
    fn allocate(&self, prefix: &str) -> Result<PathBuf, AppError>;
}
