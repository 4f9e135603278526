//! Flag schema shared by every perf-test entry point.

use clap::{Args, Command};

use crate::domain::ModeSwitches;

/// Options common to all perf-test commands.
///
/// Flatten into a parser with `#[command(flatten)]`, or attach to a builder
/// with [`register_args`].
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
    /// Run non-interactively on CI (requires --working-directory)
    #[arg(long)]
    pub ci_mode: bool,
    /// Checkout of the field trial variations repository
    #[arg(long, value_name = "PATH")]
    pub variations_repo_dir: Option<String>,
    /// Directory for binaries, profiles and results (default: new temp dir)
    #[arg(long, value_name = "PATH")]
    pub working_directory: Option<String>,
    /// Target OS to benchmark (default: current platform)
    #[arg(long = "target_os", value_name = "NAME")]
    pub target_os: Option<String>,
    /// Skip uploading results
    #[arg(long)]
    pub no_report: bool,
    /// Only upload previously collected results
    #[arg(long)]
    pub report_only: bool,
    /// Upload results even when the run fails
    #[arg(long)]
    pub report_on_failure: bool,
    /// Run locally without reporting
    #[arg(long)]
    pub local_run: bool,
    /// Compare targets against each other (implies --local-run)
    #[arg(long)]
    pub compare: bool,
    /// Tags/binaries to test
    #[arg(long, required = true, value_name = "LIST")]
    pub targets: String,
    /// Benchmark configuration file
    #[arg(long, required = true, value_name = "PATH")]
    pub config: String,
}

impl CommonArgs {
    /// Mode switches carried by these flags.
    pub fn mode_switches(&self) -> ModeSwitches {
        ModeSwitches {
            no_report: self.no_report,
            report_only: self.report_only,
            report_on_failure: self.report_on_failure,
            local_run: self.local_run,
            compare: self.compare,
        }
    }
}

/// Register the common flags on a builder-style command.
pub fn register_args(command: Command) -> Command {
    CommonArgs::augment_args(command)
}
