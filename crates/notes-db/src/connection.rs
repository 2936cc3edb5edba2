//! Connection opening and per-connection pragmas.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::BootstrapError;

/// Opens the database file, creating it if absent, with foreign keys enabled.
///
/// Rows read through the returned connection are addressable by column name
/// (`row.get("title")`) as well as by index.
///
/// # Errors
///
/// Returns `BootstrapError::Open` if the file cannot be opened or created, and
/// `BootstrapError::Pragma`/`PragmaRejected` if foreign-key enforcement cannot
/// be switched on.
pub fn open_connection(path: &Path) -> Result<Connection, BootstrapError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    let conn =
        Connection::open_with_flags(path, flags).map_err(|source| BootstrapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    enable_foreign_keys(&conn)?;

    Ok(conn)
}

/// Turns on foreign-key enforcement and verifies SQLite accepted it.
///
/// No foreign keys are declared yet; the flag is set so later tables get
/// enforcement without touching the bootstrap.
fn enable_foreign_keys(conn: &Connection) -> Result<(), BootstrapError> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|source| BootstrapError::Pragma {
            pragma: "foreign_keys",
            source,
        })?;

    let actual: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .map_err(|source| BootstrapError::Pragma {
            pragma: "foreign_keys",
            source,
        })?;
    if actual != 1 {
        return Err(BootstrapError::PragmaRejected {
            pragma: "foreign_keys",
            expected: 1,
            actual,
        });
    }

    tracing::debug!("foreign key enforcement enabled");
    Ok(())
}
