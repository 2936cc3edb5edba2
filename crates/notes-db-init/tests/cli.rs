use std::path::Path;
use std::process::{Command, Output};

use notes_db::SidecarOutcome;
use notes_db_init::config::Config;
use notes_db_init::{run, RunError};

fn run_binary(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notes-db-init"))
        .current_dir(dir)
        .env_remove("NOTES_DB_CONFIG_PATH")
        .env_remove("NOTES_DB_PATH")
        .env_remove("NOTES_DB_SIDECAR_PATH")
        .env_remove("NOTES_DB_LOG_LEVEL")
        .env_remove("NOTES_DB_LOG_JSON")
        .output()
        .expect("failed to launch notes-db-init")
}

#[test]
fn report_lists_progress_and_summary() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut out = Vec::new();

    let report = run(&Config::default(), dir.path().to_path_buf(), &mut out)
        .expect("run should succeed");

    let text = String::from_utf8(out).expect("report should be utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Starting SQLite setup...");
    assert_eq!(lines[1], "Creating new SQLite database...");
    assert_eq!(lines[2], "Connection information saved to db_connection.txt");
    assert!(text.contains(&format!(
        "Location: {}",
        report.database_path.display()
    )));
    assert!(text.ends_with("Script completed successfully.\n"));
}

#[test]
fn sidecar_failure_still_reports_success() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::create_dir(dir.path().join("db_connection.txt"))
        .expect("failed to create blocking directory");
    let mut out = Vec::new();

    let report = run(&Config::default(), dir.path().to_path_buf(), &mut out)
        .expect("sidecar failure should not fail the run");

    assert!(matches!(report.sidecar, SidecarOutcome::Failed(_)));
    let text = String::from_utf8(out).expect("report should be utf-8");
    assert!(text.contains("Warning: Could not save connection info: "));
    assert!(text.contains("SQLite setup complete!"));
    assert!(text.ends_with("Script completed successfully.\n"));
}

#[test]
fn database_failure_is_returned() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut config = Config::default();
    config.database.path = "missing/myapp.db".into();
    let mut out = Vec::new();

    let err = run(&config, dir.path().to_path_buf(), &mut out).expect_err("run should fail");

    assert!(matches!(err, RunError::Bootstrap(_)));
    let text = String::from_utf8(out).expect("report should be utf-8");
    assert!(!text.contains("Script completed successfully."));
}

#[test]
fn binary_exits_zero_when_sidecar_cannot_be_written() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::create_dir(dir.path().join("db_connection.txt"))
        .expect("failed to create blocking directory");

    let output = run_binary(dir.path());

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning: Could not save connection info: "));
    assert!(stdout.contains("Script completed successfully."));
    assert!(dir.path().join("myapp.db").exists());
}

#[test]
fn binary_second_run_reports_existing_database() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let first = run_binary(dir.path());
    assert!(first.status.success());
    let second = run_binary(dir.path());
    assert!(second.status.success());

    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("SQLite database already exists at myapp.db"));
}

#[test]
fn binary_exits_nonzero_when_database_cannot_be_opened() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    // A directory where the database file should be cannot be opened as SQLite.
    std::fs::create_dir(dir.path().join("myapp.db")).expect("failed to create blocking directory");

    let output = run_binary(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Error: ").count(), 1, "stderr: {stderr}");
    assert!(!dir.path().join("db_connection.txt").exists());
}
