//! Interactive entry point for the student catalog.
//!
//! # Responsibility
//! - Parse arguments, load configuration and bring up logging.
//! - Wire provider, repository and service explicitly, then hand control to
//!   the menu loop.
//!
//! # Invariants
//! - Missing configuration or schema setup failure terminates the process
//!   before any menu interaction.
//! - All collaborators are constructed once here and passed down; no global
//!   lookup anywhere below this function.

mod menu;

use clap::Parser;
use roster_core::{
    core_version, default_log_level, init_logging, Config, SqliteFileProvider,
    SqliteStudentRepository, StudentService,
};
use std::path::PathBuf;
use std::process;

/// Interactive student catalog over a SQLite store.
#[derive(Parser, Debug)]
#[command(name = "roster", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "roster.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fatal: {err}");
            process::exit(1);
        }
    };

    if let Some(dir) = &config.logging.dir {
        let level = config.logging.level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, dir) {
            // Logging is ambient, not a startup precondition; the catalog
            // still works without it.
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let provider = SqliteFileProvider::new(config.store.path.as_str());
    let repo = SqliteStudentRepository::new(provider);
    let service = StudentService::new(repo);

    if let Err(err) = service.ensure_schema() {
        eprintln!("fatal: could not prepare the students table: {err}");
        process::exit(1);
    }

    println!(
        "roster {} — store: {}",
        core_version(),
        config.store.path
    );

    if let Err(err) = menu::run(&service) {
        eprintln!("fatal: terminal i/o error: {err}");
        process::exit(1);
    }
}
