pub mod ports;

pub use ports::FixedPlatform;
pub use ports::RecordingScratchDir;
