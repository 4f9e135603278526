use std::cell::RefCell;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::domain::AppError;
use crate::ports::ScratchDirPort;

/// Scratch directory port that allocates under a private temp root and
/// records every allocation.
pub struct RecordingScratchDir {
    root: TempDir,
    allocated: RefCell<Vec<PathBuf>>,
    should_fail: RefCell<bool>,
}

impl RecordingScratchDir {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create scratch root"),
            allocated: RefCell::new(Vec::new()),
            should_fail: RefCell::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn allocated(&self) -> Vec<PathBuf> {
        self.allocated.borrow().clone()
    }
}

impl ScratchDirPort for RecordingScratchDir {
    fn allocate(&self, prefix: &str) -> Result<PathBuf, AppError> {
        if *self.should_fail.borrow() {
            return Err(std::io::Error::other("Mock scratch dir error").into());
        }
        let path = tempfile::Builder::new().prefix(prefix).tempdir_in(self.root.path())?.keep();
        self.allocated.borrow_mut().push(path.clone());
        Ok(path)
    }
}
