//! App metadata rows in `app_info`.

use rusqlite::{params, Connection};

use crate::BootstrapError;

/// Key/value rows written on every bootstrap.
pub const APP_METADATA: &[(&str, &str)] = &[
    ("project_name", "simple-notes-app"),
    ("version", "0.1.0"),
    (
        "description",
        "A simple notes app where users can add, edit, and delete notes.",
    ),
];

/// Upserts every [`APP_METADATA`] row, keyed on `app_info.key`.
///
/// Existing keys get their `value` overwritten in place (keeping `id` and
/// `created_at`); missing keys are inserted. Returns the number of rows
/// written.
///
/// # Errors
///
/// Returns `BootstrapError::Seed` naming the key whose upsert failed.
pub fn seed_metadata(conn: &Connection) -> Result<usize, BootstrapError> {
    upsert_rows(conn, APP_METADATA)
}

fn upsert_rows(
    conn: &Connection,
    rows: &[(&'static str, &str)],
) -> Result<usize, BootstrapError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO app_info (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .map_err(|source| BootstrapError::Seed {
            key: rows.first().map_or("", |&(key, _)| key),
            source,
        })?;

    for &(key, value) in rows {
        stmt.execute(params![key, value])
            .map_err(|source| BootstrapError::Seed { key, source })?;
        tracing::debug!(key, "upserted app_info row");
    }

    tracing::info!(count = rows.len(), "seeded app metadata");
    Ok(rows.len())
}
