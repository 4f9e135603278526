//! Resolution of parsed command-line flags into [`RunOptions`].

use std::path::PathBuf;

use log::debug;

use crate::app::AppContext;
use crate::app::cli::args::CommonArgs;
use crate::domain::{AppError, RunMode, RunOptions, RunOptionsParts, split_targets};
use crate::ports::{PlatformPort, ScratchDirPort};

/// Prefix for working directories allocated when none is given.
pub const WORKING_DIR_PREFIX: &str = "perf-test-";

/// Build run options from parsed flags.
///
/// Allocates a scratch working directory when `--working-directory` is absent
/// outside CI mode; nothing else touches the environment.
pub fn execute<P, S>(ctx: &AppContext<P, S>, args: &CommonArgs) -> Result<RunOptions, AppError>
where
    P: PlatformPort,
    S: ScratchDirPort,
{
    let working_directory = resolve_working_directory(ctx.scratch(), args)?;
    let target_os = resolve_target_os(ctx.platform(), args.target_os.as_deref());
    let mode = RunMode::derive(args.mode_switches(), &args.targets);
    debug!(
        "Run mode: run_tests={} report={} local_run={} compare={}",
        mode.do_run_tests, mode.do_report, mode.local_run, mode.compare
    );

    Ok(RunOptions::new(RunOptionsParts {
        verbose: args.verbose,
        ci_mode: args.ci_mode,
        variations_repo_dir: args.variations_repo_dir.as_ref().map(PathBuf::from),
        working_directory,
        target_os,
        mode,
        targets: split_targets(&args.targets),
        config: args.config.clone(),
    }))
}

fn resolve_working_directory<S: ScratchDirPort>(
    scratch: &S,
    args: &CommonArgs,
) -> Result<PathBuf, AppError> {
    match &args.working_directory {
        Some(dir) if dir.is_empty() => {
            Err(AppError::config_error("--working-directory must not be empty"))
        }
        Some(dir) => Ok(PathBuf::from(dir)),
        None if args.ci_mode => {
            Err(AppError::config_error("Set --working-directory for --ci-mode"))
        }
        None => {
            let dir = scratch.allocate(WORKING_DIR_PREFIX)?;
            debug!("Using temporary working directory {}", dir.display());
            Ok(dir)
        }
    }
}

fn resolve_target_os<P: PlatformPort>(platform: &P, requested: Option<&str>) -> String {
    let raw = match requested {
        Some(name) => name.to_string(),
        None => platform.current_platform(),
    };
    let target_os = platform.normalize(&raw);
    debug!("Target OS: {} (from {})", target_os, raw);
    target_os
}
