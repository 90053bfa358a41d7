use clap::Parser;

use gator::cli::Cli;
use gator::commands::{CommandRegistry, State};
use gator::config::Config;
use gator::errors::{GatorError, GatorResult};
use gator::logging;
use gator::storage::sqlite::SqliteStorage;

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> GatorResult<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(GatorError::Usage(e.to_string().trim_end().to_string())),
    };

    let registry = CommandRegistry::with_defaults();

    let command = cli.into_command().ok_or_else(|| {
        GatorError::Usage(format!(
            "Not enough arguments. Usage: gator <command> [args...]\nAvailable commands: {}",
            registry.names().join(", ")
        ))
    })?;

    // Load configuration
    let config = Config::read()?;

    // Initialize storage
    let storage = SqliteStorage::open(&config.db_url)?;

    let mut state = State::with_sqlite(storage, config);
    registry.dispatch(&mut state, &command)
}
