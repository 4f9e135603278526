//! perfopt: command-line option resolution for performance-test runs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CommonArgs, OutputFormat, register_args, render, resolve};
pub use app::{AppContext, commands::resolve::WORKING_DIR_PREFIX};
pub use domain::{AppError, RunOptions};
