//! Rendering of resolved options for downstream tooling.

use clap::ValueEnum;

use crate::domain::{AppError, RunOptions};

/// Output format for resolved options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `key: value` line per option
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
    /// TOML document
    Toml,
}

/// Render options in the requested format.
pub fn render(options: &RunOptions, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_text(options)),
        OutputFormat::Json => serde_json::to_string_pretty(options)
            .map_err(|e| AppError::Serialization { format: "json".into(), details: e.to_string() }),
        OutputFormat::Toml => toml::to_string(options)
            .map_err(|e| AppError::Serialization { format: "toml".into(), details: e.to_string() }),
    }
}

fn render_text(options: &RunOptions) -> String {
    let variations = options
        .variations_repo_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = [
        ("verbose", options.verbose().to_string()),
        ("ci_mode", options.ci_mode().to_string()),
        ("variations_repo_dir", variations),
        ("working_directory", options.working_directory().display().to_string()),
        ("target_os", options.target_os().to_string()),
        ("do_run_tests", options.do_run_tests().to_string()),
        ("do_report", options.do_report().to_string()),
        ("report_on_failure", options.report_on_failure().to_string()),
        ("local_run", options.local_run().to_string()),
        ("compare", options.compare().to_string()),
        ("targets", options.targets().join(",")),
        ("config", options.config().to_string()),
    ];

    lines.iter().map(|(key, value)| format!("{key}: {value}\n")).collect()
}
