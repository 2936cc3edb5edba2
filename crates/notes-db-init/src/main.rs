//! `notes-db-init` — creates the notes app database in the current directory.
//!
//! Takes no arguments. Prints a human-readable report on stdout; structured
//! logs go to stderr. Exits non-zero only when the database itself could not
//! be set up; a failed connection-info write is reported as a warning.

use std::process::ExitCode;

use notes_db_init::{config, init_tracing, run, RunError};

fn start() -> Result<(), RunError> {
    let config = config::load_config()?;
    init_tracing(&config.logging);

    let workdir = std::env::current_dir().map_err(RunError::CurrentDir)?;
    run(&config, workdir, &mut std::io::stdout().lock())?;

    Ok(())
}

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
