//! Recreates a SQLite database from a schema script.

pub mod init;
pub mod opt;
pub mod paths;
pub mod reset;
pub mod tables;

pub use paths::Paths;

use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Deletes the database, recreates it from the schema and reports the tables it now contains.
pub fn run(paths: &Paths, out: &mut impl Write) -> Result<Vec<String>> {
    let removed = reset::run(&paths.db)?;

    init::run(&paths.db, &paths.schema)?;

    info!(path = %paths.db.display(), replaced = removed, "database created");
    writeln!(out, "Database {} created successfully.", paths.db.display())?;

    let names = tables::list(&paths.db)?;
    tables::run(&names, out)?;

    Ok(names)
}
