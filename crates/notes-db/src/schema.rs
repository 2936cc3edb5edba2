//! Embedded schema, applied with create-if-absent statements.
//!
//! Unlike versioned migrations there is no tracking table: every step is
//! safe to run again, so the whole list is executed on each bootstrap.

use rusqlite::Connection;

use crate::BootstrapError;

/// A single embedded schema step.
struct SchemaStep {
    name: &'static str,
    sql: &'static str,
}

/// All schema steps in order. New steps are appended here.
const SCHEMA: &[SchemaStep] = &[
    SchemaStep {
        name: "001_notes",
        sql: include_str!("schema/001_notes.sql"),
    },
    SchemaStep {
        name: "002_app_info",
        sql: include_str!("schema/002_app_info.sql"),
    },
];

/// Creates the `notes` table, its `updated_at` index and the `app_info`
/// table if they do not already exist.
///
/// Returns the number of schema steps executed.
///
/// # Errors
///
/// Returns `BootstrapError::Schema` naming the first step that fails.
pub fn ensure_schema(conn: &Connection) -> Result<usize, BootstrapError> {
    apply_steps(conn, SCHEMA)
}

fn apply_steps(conn: &Connection, steps: &[SchemaStep]) -> Result<usize, BootstrapError> {
    for step in steps {
        tracing::info!(step = step.name, "ensuring schema");
        conn.execute_batch(step.sql)
            .map_err(|source| BootstrapError::Schema {
                step: step.name,
                source,
            })?;
    }

    Ok(steps.len())
}
