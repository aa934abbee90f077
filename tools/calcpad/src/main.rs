//! Calcpad - Keypad calculator with history and AI problem solving
//!
//! Three modes share one binary: an interactive keypad REPL, one-shot key
//! evaluation, and natural-language problem solving through a remote model.

mod config;
mod keys;
mod render;
mod repl;

use anyhow::{bail, Result};
use calcpad_engine::Calculator;
use calcpad_solver::{GeminiSolver, ProblemSolver};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::CalcpadConfig;

#[derive(Parser)]
#[command(name = "calcpad")]
#[command(about = "Calcpad - keypad calculator, history and AI problem solver")]
#[command(long_about = "Calcpad - keypad calculator, history and AI problem solver

Modes:
  repl        Interactive keypad calculator (default)
  eval        Evaluate a sequence of keys and print the display
  solve       Solve a word problem with the AI solver

Examples:
  calcpad                               # Start the REPL
  calcpad eval 5 + 3 + 2 =              # Prints 10
  calcpad eval 30 sin --json            # State and history as JSON
  calcpad solve \"15% of 80 apples\"       # Step-by-step answer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: ./calcpad.yaml when present)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive keypad calculator
    Repl,

    /// Evaluate keys on a fresh calculator
    Eval {
        /// Keys, e.g. `5 + 3 =` or `12+3=`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,

        /// Print engine state and history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve a natural-language problem
    Solve {
        /// Problem text
        #[arg(required = true)]
        problem: Vec<String>,

        /// Print the solution as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize logging to stderr, keeping stdout for calculator output
fn init_logging(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    // Configure colored output
    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    init_logging(&config.logging.level, cli.verbose);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run_repl(&config).await,
        Commands::Eval { keys, json } => handle_eval(&config, &keys.join(" "), json),
        Commands::Solve { problem, json } => handle_solve(&config, &problem.join(" "), json).await,
    }
}

fn handle_eval(config: &CalcpadConfig, keys: &str, json: bool) -> Result<()> {
    let actions = keys::parse_keys(keys)?;
    let mut calculator = Calculator::new();
    calculator.apply_all(actions);

    if json {
        let snapshot = render::Snapshot {
            state: calculator.state(),
            history: calculator.history(),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        render::print_display(calculator.state(), config.display.show_equation);
    }
    Ok(())
}

async fn handle_solve(config: &CalcpadConfig, problem: &str, json: bool) -> Result<()> {
    if config.solver.api_key().is_none() {
        bail!(
            "No API key configured. Set {} or solver.api_key in calcpad.yaml",
            "API_KEY".bright_yellow()
        );
    }

    let solver = GeminiSolver::new(config.solver.clone())?;
    let solution = solver.solve(problem).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        render::print_solution(&solution);
    }
    Ok(())
}
