mod platform;
mod scratch_dir;

pub use platform::PlatformPort;
pub use scratch_dir::ScratchDirPort;
