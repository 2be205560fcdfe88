use anyhow::Result;
use std::io::stdout;
use taskdb_init::opt;
use taskdb_init::opt::Command;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = match opt::parse(std::env::args_os().skip(1).collect())? {
        Command::Help => {
            print!("{}", opt::HELP);
            return Ok(());
        }
        Command::Version => {
            println!("taskdb-init {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Run(paths) => paths,
    };

    taskdb_init::run(&paths, &mut stdout().lock())?;

    Ok(())
}
