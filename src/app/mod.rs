pub mod api;
pub mod cli;
pub mod commands;
pub mod output;
mod context;

pub use context::AppContext;
