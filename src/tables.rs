use anyhow::Context;
use anyhow::Result;
use rusqlite::Connection;
use rusqlite::OpenFlags;
use std::io::Write;
use std::path::Path;

/// Table names in catalog order. The database must already exist.
pub fn list(db_path: &Path) -> Result<Vec<String>> {
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to reopen {}", db_path.display()))?;

    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table'")?;

    let iter = stmt.query_map([], |row| row.get(0))?;

    let r: Result<Vec<String>, rusqlite::Error> = iter.collect();

    Ok(r?)
}

pub fn run(names: &[String], out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nTables in database:")?;

    for name in names {
        writeln!(out, "{name}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_tables() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "
            CREATE TABLE tasks (id INTEGER PRIMARY KEY);
            CREATE INDEX idx_tasks ON tasks(id);
            CREATE VIEW open_tasks AS SELECT * FROM tasks;
            ",
        )
        .unwrap();
        conn.close().unwrap();

        assert_eq!(list(&db_path).unwrap(), vec!["tasks".to_string()]);
    }

    #[test]
    fn missing_database_is_an_error() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");

        assert!(list(&db_path).is_err());
        assert!(!db_path.exists());
    }

    #[test]
    fn prints_header_then_names() {
        let mut out = Vec::new();

        run(&["tasks".to_string(), "users".to_string()], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nTables in database:\ntasks\nusers\n"
        );
    }
}
