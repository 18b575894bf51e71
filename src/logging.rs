use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Interactive terminal UI and quiet `--once` runs
    FileOnly,
    /// Debug runs, HTML export and the relay
    StdoutAndFile,
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["poe2_leagues=info", "poe2_relay=info"] {
        filter = filter.add_directive(directive.parse().map_err(|e| {
            AppError::log_setup_error(format!("Invalid log directive '{directive}': {e}"))
        })?);
    }
    Ok(filter)
}

/// Splits a custom log path into directory and file name, or falls back to
/// the default log directory with `default_file_name`.
pub fn resolve_log_location(custom_path: Option<&str>, default_file_name: &str) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(default_file_name);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), default_file_name.to_string()),
    }
}

/// Sets up logging with a daily rolling file appender.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    output: LogOutput,
    custom_log_path: Option<&str>,
    default_file_name: &str,
) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path, default_file_name);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);
    match output {
        LogOutput::FileOnly => registry.try_init(),
        LogOutput::StdoutAndFile => registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init(),
    }
    .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
