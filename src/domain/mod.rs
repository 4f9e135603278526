pub mod error;
pub mod run_options;
pub mod target_os;

pub use error::AppError;
pub(crate) use run_options::RunOptionsParts;
pub use run_options::{COMPARE_TARGET, ModeSwitches, RunMode, RunOptions, split_targets};
pub use target_os::{fixup_target_os, host_platform_name};
