//! Interactive keypad REPL
//!
//! Each input line is a run of calculator keys, or a `:`-prefixed command for
//! history and the AI solver. The engine lives for the whole session; history
//! is lost on exit.

use anyhow::{Context, Result};
use calcpad_engine::Calculator;
use calcpad_solver::{GeminiSolver, ProblemSolver};
use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use tracing::warn;

use crate::config::CalcpadConfig;
use crate::keys::{key_names, parse_keys};
use crate::render;

const COMMANDS: [&str; 6] = [":history", ":solve", ":state", ":help", ":quit", ":exit"];

// ============================================================================
// Tab Completion Helper
// ============================================================================

/// REPL helper providing Tab completion for keys and commands
struct CalcHelper {
    keys: Vec<String>,
}

impl Helper for CalcHelper {}

impl Hinter for CalcHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let start = line.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = &line[start..];

        // Free text after :solve is not completed
        if start > 0 && line.trim_start().starts_with(":solve") {
            return Ok((pos, vec![]));
        }

        let candidates: Vec<Pair> = if start == 0 && word.starts_with(':') {
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(word))
                .map(|cmd| pair(cmd))
                .collect()
        } else if word.is_empty() {
            vec![]
        } else {
            let lower = word.to_lowercase();
            self.keys
                .iter()
                .filter(|key| key.len() > 1 && key.starts_with(&lower))
                .map(|key| pair(key))
                .collect()
        };

        Ok((start, candidates))
    }
}

fn pair(text: &str) -> Pair {
    Pair {
        display: text.to_string(),
        replacement: text.to_string(),
    }
}

// ============================================================================
// REPL loop
// ============================================================================

/// Interactive REPL loop
pub async fn run_repl(config: &CalcpadConfig) -> Result<()> {
    let mut calculator = Calculator::new();

    let editor_config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut rl = Editor::with_config(editor_config).context("Failed to initialize readline")?;
    rl.set_helper(Some(CalcHelper { keys: key_names() }));

    println!("{}", "Calcpad".bright_cyan().bold());
    println!(
        "Type keys like {} or '{}' for commands, {} for completion\n",
        "12 + 3 =".bright_yellow(),
        ":help".bright_yellow(),
        "Tab".bright_cyan()
    );
    render::print_display(calculator.state(), config.display.show_equation);

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history (ignore errors)
                let _ = rl.add_history_entry(line);

                match execute_line(&mut calculator, config, line).await {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            },
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Execute a single REPL line
/// Returns Ok(true) to continue, Ok(false) to quit
async fn execute_line(
    calculator: &mut Calculator,
    config: &CalcpadConfig,
    line: &str,
) -> Result<bool> {
    if !line.starts_with(':') {
        if matches!(line, "quit" | "exit") {
            return Ok(false);
        }
        let actions = parse_keys(line)?;
        for action in actions {
            if let Some(entry) = calculator.apply(action) {
                println!("  {} {}", entry.expression.dimmed(), entry.result.dimmed());
            }
        }
        render::print_display(calculator.state(), config.display.show_equation);
        return Ok(true);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match command.to_lowercase().as_str() {
        ":history" | ":h" => {
            let limit = if rest.is_empty() {
                config.display.history_limit
            } else {
                rest.parse::<usize>()
                    .with_context(|| format!("Invalid history count '{}'", rest))?
            };
            render::print_history(calculator.history(), limit);
        },
        ":solve" | ":ai" => {
            if rest.is_empty() {
                println!("Usage: :solve <problem>");
            } else {
                solve(config, rest).await;
            }
        },
        ":state" => {
            println!("{}", serde_json::to_string_pretty(calculator.state())?);
        },
        ":help" | ":?" => render::print_help(),
        ":quit" | ":exit" | ":q" => return Ok(false),
        unknown => {
            println!(
                "Unknown command '{}'. Type '{}' for available commands.",
                unknown.red(),
                ":help".bright_yellow()
            );
        },
    }
    Ok(true)
}

/// Run the solver and print the outcome; failures never end the session
async fn solve(config: &CalcpadConfig, problem: &str) {
    let solver = match GeminiSolver::new(config.solver.clone()) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{} {}", "Solver unavailable:".red(), e);
            return;
        },
    };

    println!("{}", "Thinking...".dimmed());
    match solver.solve(problem).await {
        Ok(solution) => render::print_solution(&solution),
        Err(e) => {
            warn!(error = %e, "solver failed");
            eprintln!(
                "{} {}",
                "Could not solve the problem:".red(),
                e.to_string().red()
            );
        },
    }
}
