mod fixed_platform;
mod recording_scratch_dir;

pub use self::fixed_platform::FixedPlatform;
pub use self::recording_scratch_dir::RecordingScratchDir;
