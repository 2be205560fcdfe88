use anyhow::Context;
use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn run(db_path: &Path, schema_path: &Path) -> Result<()> {
    // Read first so a missing schema doesn't leave an empty database behind.
    let schema = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;

    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;

    debug!(schema = %schema_path.display(), bytes = schema.len(), "executing schema");

    conn.execute_batch(&schema)
        .with_context(|| format!("failed to execute schema {}", schema_path.display()))?;

    // A transaction left open by the script would be rolled back on close.
    if !conn.is_autocommit() {
        conn.execute_batch("COMMIT")
            .with_context(|| format!("failed to commit {}", db_path.display()))?;
    }

    conn.close()
        .map_err(|(_, e)| e)
        .with_context(|| format!("failed to close {}", db_path.display()))?;

    Ok(())
}
