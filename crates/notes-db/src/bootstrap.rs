//! The linear bootstrap pass.
//!
//! `check → connect → schema → seed → commit → sidecar → close`. Every step
//! before the sidecar is fatal on error; the sidecar write only warns.

use std::fmt;
use std::path::PathBuf;

use crate::sidecar::{write_sidecar, ConnectionInfo};
use crate::{connection, ensure_schema, seed_metadata, BootstrapError};

/// Database file created when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "myapp.db";

/// Connection-info file written when nothing else is configured.
pub const DEFAULT_SIDECAR_PATH: &str = "db_connection.txt";

/// Where the bootstrap reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Directory relative paths are resolved against. A relative `workdir`
    /// is made absolute against the process's current directory.
    pub workdir: PathBuf,
    /// Database file path, relative to `workdir` unless absolute.
    pub database_path: PathBuf,
    /// Sidecar file path, relative to `workdir` unless absolute.
    pub sidecar_path: PathBuf,
}

impl BootstrapOptions {
    /// Options using the default file names inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            sidecar_path: PathBuf::from(DEFAULT_SIDECAR_PATH),
        }
    }

    /// `workdir` as an absolute path, so reported locations never depend on
    /// how the caller spelled it.
    fn absolute_workdir(&self) -> Result<PathBuf, BootstrapError> {
        std::path::absolute(&self.workdir).map_err(|source| BootstrapError::Workdir {
            path: self.workdir.clone(),
            source,
        })
    }
}

/// Progress notifications, in the order they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEvent {
    /// The pass has started.
    Starting,
    /// The database file was present before connecting.
    AlreadyExists {
        /// The configured database path.
        database_name: String,
    },
    /// The database file was absent and will be created.
    CreatingNew,
    /// The sidecar file was written.
    SidecarSaved {
        /// The configured sidecar path.
        sidecar_name: String,
    },
    /// The sidecar file could not be written; the pass continues.
    SidecarFailed {
        /// Description of the underlying I/O failure.
        error: String,
    },
}

impl fmt::Display for BootstrapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting => write!(f, "Starting SQLite setup..."),
            Self::AlreadyExists { database_name } => {
                write!(f, "SQLite database already exists at {database_name}")
            }
            Self::CreatingNew => write!(f, "Creating new SQLite database..."),
            Self::SidecarSaved { sidecar_name } => {
                write!(f, "Connection information saved to {sidecar_name}")
            }
            Self::SidecarFailed { error } => {
                write!(f, "Warning: Could not save connection info: {error}")
            }
        }
    }
}

/// Result of the best-effort sidecar write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarOutcome {
    /// Written to the given absolute path.
    Written(PathBuf),
    /// Not written; carries the I/O error description.
    Failed(String),
}

/// Summary of a completed bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// The configured database path, e.g. `myapp.db`.
    pub database_name: String,
    /// Absolute path to the database file.
    pub database_path: PathBuf,
    /// Whether the file existed before this run.
    pub existed: bool,
    /// Number of schema steps executed.
    pub schema_steps: usize,
    /// Number of metadata rows upserted.
    pub metadata_rows: usize,
    /// What happened to the sidecar file.
    pub sidecar: SidecarOutcome,
}

impl fmt::Display for BootstrapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "SQLite setup complete!")?;
        writeln!(f, "Database: {}", self.database_name)?;
        writeln!(f, "Location: {}", self.database_path.display())?;
        writeln!(f)?;
        write!(f, "Script completed successfully.")
    }
}

/// Runs the bootstrap pass, reporting progress through `on_event`.
///
/// Safe to call repeatedly: schema objects are only created when absent and
/// metadata rows are upserted by key. The existence check only affects the
/// reported event; schema creation always runs.
///
/// # Errors
///
/// Returns `BootstrapError` if the database cannot be opened, the schema or
/// metadata cannot be written, or the commit or close fails. A sidecar write
/// failure is not an error; it surfaces as [`BootstrapEvent::SidecarFailed`]
/// and [`SidecarOutcome::Failed`].
pub fn bootstrap(
    options: &BootstrapOptions,
    mut on_event: impl FnMut(&BootstrapEvent),
) -> Result<BootstrapReport, BootstrapError> {
    on_event(&BootstrapEvent::Starting);

    let workdir = options.absolute_workdir()?;
    let info = ConnectionInfo::new(&workdir, &options.database_path);

    let existed = info.database_path.exists();
    if existed {
        on_event(&BootstrapEvent::AlreadyExists {
            database_name: info.database_name.clone(),
        });
    } else {
        on_event(&BootstrapEvent::CreatingNew);
    }
    tracing::info!(path = %info.database_path.display(), existed, "opening database");

    let conn = connection::open_connection(&info.database_path)?;

    let (schema_steps, metadata_rows) = {
        let tx = conn
            .unchecked_transaction()
            .map_err(BootstrapError::Transaction)?;
        let schema_steps = ensure_schema(&tx)?;
        let metadata_rows = seed_metadata(&tx)?;
        tx.commit().map_err(BootstrapError::Commit)?;
        (schema_steps, metadata_rows)
    };
    tracing::info!(schema_steps, metadata_rows, "bootstrap changes committed");

    let sidecar_path = workdir.join(&options.sidecar_path);
    let sidecar = match write_sidecar(&sidecar_path, &info) {
        Ok(()) => {
            on_event(&BootstrapEvent::SidecarSaved {
                sidecar_name: options.sidecar_path.display().to_string(),
            });
            SidecarOutcome::Written(sidecar_path)
        }
        Err(e) => {
            tracing::warn!(
                path = %sidecar_path.display(),
                error = %e,
                "could not write connection info"
            );
            let error = e.to_string();
            on_event(&BootstrapEvent::SidecarFailed {
                error: error.clone(),
            });
            SidecarOutcome::Failed(error)
        }
    };

    conn.close()
        .map_err(|(_conn, source)| BootstrapError::Close(source))?;
    tracing::debug!("database connection closed");

    Ok(BootstrapReport {
        database_name: info.database_name,
        database_path: info.database_path,
        existed,
        schema_steps,
        metadata_rows,
        sidecar,
    })
}
