//! API Facade for the application.
//!
//! Wires the real platform and scratch directory adapters into option
//! resolution.

use crate::adapters::{HostPlatform, TempScratchDir};
use crate::app::{AppContext, commands::resolve};

pub use crate::app::cli::args::{CommonArgs, register_args};
pub use crate::app::output::{OutputFormat, render};
pub use crate::domain::{AppError, RunOptions};

/// Resolve parsed flags against the host platform and system temp directory.
pub fn resolve(args: &CommonArgs) -> Result<RunOptions, AppError> {
    let ctx = AppContext::new(HostPlatform::new(), TempScratchDir::new());
    resolve::execute(&ctx, args)
}
