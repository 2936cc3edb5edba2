//! Command-line front end for the notes database bootstrap.
//!
//! The binary in `main.rs` only loads configuration, installs the tracing
//! subscriber and maps [`run`]'s result to an exit status.

pub mod config;

use std::io::Write;
use std::path::PathBuf;

use notes_db::{BootstrapError, BootstrapOptions, BootstrapReport};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Failures that end the process with a non-zero status.
#[derive(Debug, Error)]
pub enum RunError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// The working directory could not be determined.
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The database bootstrap failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the report.
pub fn init_tracing(logging: &config::LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("warn"));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Bootstraps the database in `workdir` and writes the progress lines and
/// final summary to `out`.
///
/// # Errors
///
/// Returns `RunError::Bootstrap` for any database failure and
/// `RunError::Output` if `out` rejects a write. A failed sidecar write only
/// shows up as a warning line in `out`.
pub fn run(
    config: &config::Config,
    workdir: PathBuf,
    out: &mut impl Write,
) -> Result<BootstrapReport, RunError> {
    let options = BootstrapOptions {
        workdir,
        database_path: config.database.path.clone(),
        sidecar_path: config.sidecar.path.clone(),
    };
    tracing::debug!(?options, "resolved bootstrap options");

    let mut output = Ok(());
    let report = notes_db::bootstrap(&options, |event| {
        if output.is_ok() {
            output = writeln!(out, "{event}");
        }
    })?;
    output.map_err(RunError::Output)?;

    writeln!(out, "{report}").map_err(RunError::Output)?;

    Ok(report)
}
