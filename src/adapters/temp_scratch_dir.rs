use std::path::PathBuf;

use log::debug;

use crate::domain::AppError;
use crate::ports::ScratchDirPort;

/// Scratch directory allocation backed by `tempfile`.
///
/// Directories are kept on disk after allocation.
#[derive(Debug, Clone, Default)]
pub struct TempScratchDir {
    parent: Option<PathBuf>,
}

impl TempScratchDir {
    /// Allocate under the system temp directory.
    pub fn new() -> Self {
        Self { parent: None }
    }

    /// Allocate under a specific parent directory.
    pub fn in_dir(parent: PathBuf) -> Self {
        Self { parent: Some(parent) }
    }
}

impl ScratchDirPort for TempScratchDir {
    fn allocate(&self, prefix: &str) -> Result<PathBuf, AppError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix);
        let dir = match &self.parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        let path = dir.keep();
        debug!("Allocated scratch directory {}", path.display());
        Ok(path)
    }
}
