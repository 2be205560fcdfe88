use anyhow::Context;
use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Deletes the database file at `db_path` if there is one. Returns whether a file was removed.
pub fn run(db_path: &Path) -> Result<bool> {
    match fs::remove_file(db_path) {
        Ok(()) => {
            debug!(path = %db_path.display(), "removed existing database");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %db_path.display(), "no existing database");
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", db_path.display())),
    }
}
