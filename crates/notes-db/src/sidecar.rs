//! Human-readable connection info written next to the database.

use std::fmt;
use std::path::{Path, PathBuf};

/// How to reach the bootstrapped database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// The database path as configured, e.g. `myapp.db`.
    pub database_name: String,
    /// Absolute path to the database file.
    pub database_path: PathBuf,
}

impl ConnectionInfo {
    /// Builds connection info for `database_name` resolved against `workdir`.
    ///
    /// `workdir` must already be absolute for `database_path` to be.
    pub fn new(workdir: &Path, database_name: &Path) -> Self {
        Self {
            database_name: database_name.display().to_string(),
            database_path: workdir.join(database_name),
        }
    }

    /// `sqlite:///` followed by the absolute path, so `/tmp/x/myapp.db`
    /// becomes `sqlite:////tmp/x/myapp.db`.
    pub fn connection_string(&self) -> String {
        format!("sqlite:///{}", self.database_path.display())
    }

    /// Renders the sidecar file contents.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# SQLite connection methods:")?;
        writeln!(
            f,
            "# Rust: rusqlite::Connection::open({:?})",
            self.database_name
        )?;
        writeln!(f, "# Connection string: {}", self.connection_string())?;
        writeln!(f, "# File path: {}", self.database_path.display())
    }
}

/// Writes `info` to `path`, replacing any previous contents.
///
/// # Errors
///
/// Returns the underlying I/O error; callers treat it as a warning.
pub fn write_sidecar(path: &Path, info: &ConnectionInfo) -> std::io::Result<()> {
    std::fs::write(path, info.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> ConnectionInfo {
        ConnectionInfo::new(Path::new("/tmp/x"), Path::new("myapp.db"))
    }

    #[test]
    fn connection_string_has_four_slashes_for_absolute_path() {
        assert_eq!(info().connection_string(), "sqlite:////tmp/x/myapp.db");
    }

    #[test]
    fn render_lists_snippet_string_and_path() {
        let rendered = info().render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            [
                "# SQLite connection methods:",
                "# Rust: rusqlite::Connection::open(\"myapp.db\")",
                "# Connection string: sqlite:////tmp/x/myapp.db",
                "# File path: /tmp/x/myapp.db",
            ]
        );
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn absolute_database_name_is_kept() {
        let info = ConnectionInfo::new(Path::new("/tmp/x"), Path::new("/srv/data/app.db"));
        assert_eq!(info.database_path, PathBuf::from("/srv/data/app.db"));
        assert_eq!(info.connection_string(), "sqlite:////srv/data/app.db");
    }

    #[test]
    fn write_sidecar_overwrites_previous_contents() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("db_connection.txt");
        let stale = "stale contents that are much longer than the new file\n".repeat(10);
        std::fs::write(&path, stale).expect("should write stale file");

        write_sidecar(&path, &info()).expect("sidecar write should succeed");

        let written = std::fs::read_to_string(&path).expect("should read sidecar");
        assert_eq!(written, info().render());
    }

    #[test]
    fn write_sidecar_reports_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        // A directory cannot be opened as a file, even by root.
        let err = write_sidecar(dir.path(), &info()).expect_err("write should fail");
        assert!(!err.to_string().is_empty());
    }
}
