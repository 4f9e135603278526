use crate::ports::{PlatformPort, ScratchDirPort};

/// Application context holding the collaborators option resolution depends on.
pub struct AppContext<P: PlatformPort, S: ScratchDirPort> {
    platform: P,
    scratch: S,
}

impl<P: PlatformPort, S: ScratchDirPort> AppContext<P, S> {
    /// Create a new application context.
    pub fn new(platform: P, scratch: S) -> Self {
        Self { platform, scratch }
    }

    /// Get a reference to the platform port.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Get a reference to the scratch directory port.
    pub fn scratch(&self) -> &S {
        &self.scratch
    }
}
