use crate::paths::Paths;
use anyhow::bail;
use anyhow::Result;
use pico_args::Arguments;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
Recreates the task manager database from its schema file

USAGE:
  taskdb-init [OPTIONS]

OPTIONS:
  -d, --db <PATH>       Database file to recreate [default: task_manager.db next to the schema]
  -s, --schema <PATH>   Schema script to execute [default: task_database.sql in the crate root]
  -h, --help            Print help
  -V, --version         Print version

The default paths point into the source directory this binary was built from, so an
installed copy recreates the database there unless --db is given.
";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Run(Paths),
}

pub fn parse(args: Vec<OsString>) -> Result<Command> {
    let mut args = Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    if args.contains(["-V", "--version"]) {
        return Ok(Command::Version);
    }

    let mut paths = Paths::default();

    if let Some(db) = args.opt_value_from_os_str(["-d", "--db"], parse_path)? {
        paths.db = db;
    }

    if let Some(schema) = args.opt_value_from_os_str(["-s", "--schema"], parse_path)? {
        paths.schema = schema;
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }

    Ok(Command::Run(paths))
}

fn parse_path(s: &OsStr) -> Result<PathBuf, &'static str> {
    Ok(s.into())
}
