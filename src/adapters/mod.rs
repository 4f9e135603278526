pub mod host_platform;
pub mod temp_scratch_dir;

pub use host_platform::HostPlatform;
pub use temp_scratch_dir::TempScratchDir;
