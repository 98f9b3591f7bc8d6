use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quill_db_core::engine::config::DEFAULT_PATH;
use quill_db_core::parser::parse;
use quill_db_core::{Engine, EngineConfig, format_outcome};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quill_db_core=warn,quill_db_cli=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Console for a quill-db catalog file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog file
    #[arg(value_name = "PATH", env = "QUILL_DB_PATH", default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Database to select on startup
    #[arg(value_name = "DATABASE")]
    database: Option<String>,
}

impl Args {
    fn config(self) -> EngineConfig {
        let config = EngineConfig::new(self.path);
        match self.database {
            Some(database) => config.with_database(database),
            None => config,
        }
    }
}

fn print_help() {
    println!("Statements:");
    println!("  select <fields|*> from <table> [where ...]");
    println!("  insert into <table> (<fields>) values (<values>)");
    println!("  update <table> set <field> = <value>[, ...] [where ...]");
    println!("  delete from <table> [where ...]");
    println!("  use <database> | show databases | show tables");
    println!("  drop database <name> | drop table <name>");
    println!("  exit|quit");
    println!("Console:");
    println!("  parse <stmt>  -> show the parsed action");
    println!("  rollback      -> discard uncommitted changes");
    println!("  help          -> this text");
}

fn main() -> Result<()> {
    init_logging();

    let config = Args::parse().config();
    let path = config.path.clone();
    let mut engine = Engine::open(config)
        .with_context(|| format!("failed to open catalog at {}", path.display()))?;
    debug!(path = %engine.config().path.display(), "engine ready");

    println!("quill_db_cli (type 'help' or 'exit')");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("quill> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read input")?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("rollback") {
            match engine.rollback() {
                Ok(()) => println!("rolled back"),
                Err(err) => println!("{err}"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("parse ") {
            match parse(rest) {
                Ok(action) => println!("Parsed as: {action:?}"),
                Err(err) => eprintln!("Parse error: {err}"),
            }
            continue;
        }

        match engine.execute(input) {
            Ok(outcome) => {
                println!("{}", format_outcome(&outcome));
                if outcome.is_exit() {
                    break;
                }
            }
            Err(err) => {
                warn!(statement = input, "statement failed");
                println!("{err}");
            }
        }
    }
    Ok(())
}
