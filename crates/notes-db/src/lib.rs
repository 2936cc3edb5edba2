//! Database bootstrap for the notes app.
//!
//! Creates (or reuses) the SQLite file the notes app reads from, makes sure
//! the `notes` and `app_info` tables exist, upserts the app metadata rows and
//! writes a `db_connection.txt` sidecar describing how to connect.
//!
//! # Design decisions
//!
//! - **Single connection**: the bootstrap opens exactly one connection and
//!   closes it before returning. There is no pool.
//! - **Embedded schema**: SQL files are compiled into the binary via
//!   `include_str!`. Every statement is create-if-absent, so the pass can be
//!   repeated any number of times.
//! - **Two error tiers**: persistence failures are returned as
//!   [`BootstrapError`]. A failed sidecar write is only reported through
//!   [`SidecarOutcome::Failed`] and never aborts the pass.
//!
//! # Usage
//!
//! ```rust,no_run
//! use notes_db::{bootstrap, BootstrapOptions};
//!
//! let options = BootstrapOptions::new(std::env::current_dir()?);
//! let report = bootstrap(&options, |event| println!("{event}"))?;
//! println!("{report}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bootstrap;
mod connection;
mod error;
mod schema;
mod seed;
mod sidecar;

pub use bootstrap::{
    bootstrap, BootstrapEvent, BootstrapOptions, BootstrapReport, SidecarOutcome,
    DEFAULT_DB_PATH, DEFAULT_SIDECAR_PATH,
};
pub use connection::open_connection;
pub use error::BootstrapError;
pub use schema::ensure_schema;
pub use seed::{seed_metadata, APP_METADATA};
pub use sidecar::{write_sidecar, ConnectionInfo};
