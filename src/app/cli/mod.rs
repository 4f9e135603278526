//! CLI Adapter.

pub mod args;

use clap::Parser;
use env_logger::Env;
use log::info;

use crate::app::api;
use crate::app::output::OutputFormat;
use crate::domain::AppError;
use args::CommonArgs;

#[derive(Parser)]
#[command(name = "perfopt")]
#[command(version)]
#[command(
    about = "Resolve perf-test run options from command-line flags",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// Output format for the resolved options
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    if let Err(e) = resolve_and_print(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn resolve_and_print(cli: &Cli) -> Result<(), AppError> {
    let options = api::resolve(&cli.common)?;
    info!(
        "Resolved {} target(s) for {} in {}",
        options.targets().len(),
        options.target_os(),
        options.working_directory().display()
    );
    if options.is_report_only() {
        info!("Report-only run: collected results are uploaded without running tests");
    }
    info!(
        "Reporting: on success={} on failure={}",
        options.wants_report(false),
        options.wants_report(true)
    );
    print!("{}", api::render(&options, cli.format)?);
    Ok(())
}
