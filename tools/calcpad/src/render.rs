//! Terminal output for calculator state, history and solutions

use calcpad_engine::{EngineState, HistoryEntry};
use calcpad_solver::AiSolution;
use chrono::{Local, TimeZone};
use colored::*;
use serde::Serialize;

/// Print the equation trace and the display
pub fn print_display(state: &EngineState, show_equation: bool) {
    if show_equation && !state.equation().is_empty() {
        println!("  {}", state.equation().dimmed());
    }
    let display = state.display();
    if display == "NaN" || display.ends_with("Infinity") {
        println!("  {}", display.red().bold());
    } else {
        println!("  {}", display.bright_white().bold());
    }
}

/// Format an epoch-milliseconds timestamp as local `HH:MM:SS`
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// Print up to `limit` history entries, most recent first
pub fn print_history(entries: &[HistoryEntry], limit: usize) {
    if entries.is_empty() {
        println!("  {}", "No calculations yet".dimmed());
        return;
    }

    println!(
        "{}",
        format!("History ({} of {})", entries.len().min(limit), entries.len())
            .bright_cyan()
            .bold()
    );
    for (index, entry) in entries.iter().take(limit).enumerate() {
        println!(
            "  {:>3}  {}  {} {}",
            index + 1,
            format_timestamp(entry.timestamp).dimmed(),
            entry.expression,
            entry.result.bright_white().bold()
        );
    }
}

/// Print a solver answer
pub fn print_solution(solution: &AiSolution) {
    println!("{} {}", "Problem:".bright_cyan().bold(), solution.problem);
    println!();
    println!("{}", solution.solution);

    if !solution.steps.is_empty() {
        println!();
        println!("{}", "Steps".bright_cyan().bold());
        for (index, step) in solution.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }

    println!();
    println!(
        "{} {}",
        "Result:".bright_green().bold(),
        solution.final_result.bright_white().bold()
    );
}

/// JSON snapshot of the engine for `eval --json`
#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub state: &'a EngineState,
    pub history: &'a [HistoryEntry],
}

pub fn print_help() {
    println!("{}", "Keys".bright_cyan().bold());
    println!("  0-9 .          digit entry (numbers like 12.5 work too)");
    println!("  -3             negative number, replaces the current entry");
    println!("  + - * / ^      operators, evaluated left to right");
    println!("  =              resolve the pending operation");
    println!("  %  +/-         percent, toggle sign");
    println!("  c  ce          clear all, clear entry");
    println!("  sqrt sin cos tan log ln");
    println!("                 scientific functions (trig in degrees)");
    println!("  Keys can be combined without spaces: {}", "12+3=".bright_yellow());
    println!();
    println!("{}", "Commands".bright_cyan().bold());
    println!("  :history [n]   show recent calculations");
    println!("  :solve <text>  solve a word problem with the AI solver");
    println!("  :state         show the engine state");
    println!("  :help          show this help");
    println!("  :quit          exit (also Ctrl+D)");
}
