use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tasklist::{Command, Config, FilterState, TaskStore, load_seed, view};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "tasklist - Interactive in-memory task list")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a config file (default: .tasklist.yml, then ~/.config/tasklist/tasklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed file with initial tasks (.jsonl, .json, .yml or .yaml)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Initial filter: all, active or completed
    #[arg(short, long)]
    filter: Option<FilterState>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = Config::load(cli.config.as_ref())?;

    let mut seed = config.seed_tasks()?;
    if let Some(path) = &cli.seed {
        seed.extend(load_seed(path).context(format!("Failed to load seed file {}", path.display()))?);
    }
    let filter = cli.filter.unwrap_or(config.initial_filter);

    let mut store = TaskStore::with_seed(&seed, filter);
    info!(tasks = store.len(), %filter, "Session started");

    run(&mut store)
}

fn run(store: &mut TaskStore) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", view::render(store));
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            print!("> ");
            stdout.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", tasklist::command::HELP),
            Ok(Command::Count) => println!("{}", store.count_active()),
            Ok(Command::List) => println!("{}", view::render(store)),
            Ok(command) => {
                if command.apply(store) {
                    println!("{}", view::render(store));
                } else {
                    println!("{}", "No change".dimmed());
                }
            }
            Err(e) => eprintln!("{} {:#}", "Error:".red(), e),
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
