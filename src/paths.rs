use std::path::Path;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "task_manager.db";
pub const SCHEMA_FILE_NAME: &str = "task_database.sql";

/// Locations of the database file to (re)create and the schema script to load into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub db: PathBuf,
    pub schema: PathBuf,
}

impl Paths {
    /// Both files placed side by side in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            db: dir.join(DB_FILE_NAME),
            schema: dir.join(SCHEMA_FILE_NAME),
        }
    }
}

impl Default for Paths {
    /// The crate's own directory, where `task_database.sql` is kept.
    fn default() -> Self {
        Self::in_dir(env!("CARGO_MANIFEST_DIR"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_are_siblings() {
        let paths = Paths::default();

        assert_eq!(paths.db.parent(), paths.schema.parent());
        assert!(paths.db.ends_with(DB_FILE_NAME));
        assert!(paths.schema.ends_with(SCHEMA_FILE_NAME));
    }

    #[test]
    fn default_schema_is_bundled() {
        assert!(Paths::default().schema.is_file());
    }
}
