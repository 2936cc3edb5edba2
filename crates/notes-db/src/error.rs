//! Error types for the bootstrap pass.

use std::path::PathBuf;

/// Fatal failures while creating or populating the database.
///
/// A failed sidecar write is not represented here; it surfaces as
/// [`crate::SidecarOutcome::Failed`] instead.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The working directory could not be made absolute.
    #[error("failed to resolve working directory {}: {source}", .path.display())]
    Workdir {
        /// The working directory as given.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The database file could not be opened or created.
    #[error("failed to open database at {}: {source}", .path.display())]
    Open {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// A connection pragma could not be applied.
    #[error("failed to set pragma '{pragma}': {source}")]
    Pragma {
        /// The pragma name.
        pragma: &'static str,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// The pragma was accepted but did not take effect.
    #[error("pragma '{pragma}' reads back as {actual}, expected {expected}")]
    PragmaRejected {
        /// The pragma name.
        pragma: &'static str,
        /// The value that was requested.
        expected: i64,
        /// The value SQLite reported afterwards.
        actual: i64,
    },

    /// A schema step failed.
    #[error("schema step '{step}' failed: {source}")]
    Schema {
        /// The name of the schema step that failed.
        step: &'static str,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// Upserting a metadata row failed.
    #[error("failed to upsert app_info key '{key}': {source}")]
    Seed {
        /// The metadata key being written.
        key: &'static str,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// The write transaction could not be started.
    #[error("failed to begin transaction: {0}")]
    Transaction(#[source] rusqlite::Error),

    /// The write transaction could not be committed.
    #[error("failed to commit bootstrap changes: {0}")]
    Commit(#[source] rusqlite::Error),

    /// The connection could not be closed cleanly.
    #[error("failed to close database connection: {0}")]
    Close(#[source] rusqlite::Error),
}
