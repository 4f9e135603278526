//! Resolved run options and the rules that derive run modes from raw switches.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Raw target string that turns a run into a comparison run.
pub const COMPARE_TARGET: &str = "compare";

/// Mode switches as they arrive from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSwitches {
    pub no_report: bool,
    pub report_only: bool,
    pub report_on_failure: bool,
    pub local_run: bool,
    pub compare: bool,
}

/// Run modes derived from [`ModeSwitches`] and the raw target list.
///
/// Only [`RunMode::derive`] produces one, so `compare` always implies
/// `local_run`:
///
/// ```compile_fail
/// use perfopt::domain::{ModeSwitches, RunMode};
///
/// let mode = RunMode::derive(ModeSwitches::default(), "t1");
/// let _ = mode.local_run;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMode {
    pub(crate) do_run_tests: bool,
    pub(crate) do_report: bool,
    pub(crate) report_on_failure: bool,
    pub(crate) local_run: bool,
    pub(crate) compare: bool,
}

impl RunMode {
    /// Derive run modes.
    ///
    /// `do_report` is computed from the switch values before a comparison run
    /// forces `local_run`; only an explicit `--local-run` suppresses reporting.
    pub fn derive(switches: ModeSwitches, raw_targets: &str) -> Self {
        let compare = raw_targets == COMPARE_TARGET || switches.compare;
        Self {
            do_run_tests: !switches.report_only,
            do_report: !switches.no_report && !switches.local_run,
            report_on_failure: switches.report_on_failure,
            local_run: switches.local_run || compare,
            compare,
        }
    }
}

/// Split a comma-separated target list. Entries are kept verbatim and in order.
pub fn split_targets(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Everything needed to assemble [`RunOptions`] once the environment-dependent
/// parts (working directory, target OS) have been resolved.
#[derive(Debug, Clone)]
pub(crate) struct RunOptionsParts {
    pub(crate) verbose: bool,
    pub(crate) ci_mode: bool,
    pub(crate) variations_repo_dir: Option<PathBuf>,
    pub(crate) working_directory: PathBuf,
    pub(crate) target_os: String,
    pub(crate) mode: RunMode,
    pub(crate) targets: Vec<String>,
    pub(crate) config: String,
}

/// Options for a single performance-test invocation.
///
/// Built once at startup and read-only afterwards. Outside this crate the only
/// way to obtain one is resolving parsed flags:
///
/// ```compile_fail
/// use perfopt::domain::RunOptions;
///
/// let _ = RunOptions::new;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOptions {
    verbose: bool,
    ci_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    variations_repo_dir: Option<PathBuf>,
    working_directory: PathBuf,
    target_os: String,
    do_run_tests: bool,
    do_report: bool,
    report_on_failure: bool,
    local_run: bool,
    compare: bool,
    targets: Vec<String>,
    config: String,
}

impl RunOptions {
    pub(crate) fn new(parts: RunOptionsParts) -> Self {
        let RunOptionsParts {
            verbose,
            ci_mode,
            variations_repo_dir,
            working_directory,
            target_os,
            mode,
            targets,
            config,
        } = parts;

        Self {
            verbose,
            ci_mode,
            variations_repo_dir,
            working_directory,
            target_os,
            do_run_tests: mode.do_run_tests,
            do_report: mode.do_report,
            report_on_failure: mode.report_on_failure,
            local_run: mode.local_run,
            compare: mode.compare,
            targets,
            config,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn ci_mode(&self) -> bool {
        self.ci_mode
    }

    pub fn variations_repo_dir(&self) -> Option<&Path> {
        self.variations_repo_dir.as_deref()
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn target_os(&self) -> &str {
        &self.target_os
    }

    pub fn do_run_tests(&self) -> bool {
        self.do_run_tests
    }

    pub fn do_report(&self) -> bool {
        self.do_report
    }

    pub fn report_on_failure(&self) -> bool {
        self.report_on_failure
    }

    pub fn local_run(&self) -> bool {
        self.local_run
    }

    pub fn compare(&self) -> bool {
        self.compare
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    /// True when the invocation only reports previously collected results.
    pub fn is_report_only(&self) -> bool {
        !self.do_run_tests
    }

    /// Whether results should be uploaded after a run with the given outcome.
    pub fn wants_report(&self, failed: bool) -> bool {
        self.do_report && (!failed || self.report_on_failure)
    }
}
