//! Keypad input parsing
//!
//! Turns a line of REPL input into calculator actions. Tokens are separated by
//! whitespace; each token may be a key name (`sqrt`, `+/-`, `ce`), a number
//! literal (`12.5`, `-3`), or a compact run of keys (`5+3=`, `50%`).

use anyhow::{bail, Result};
use calcpad_engine::{Action, BinaryOp, Digit, ScientificFn};

/// Parse a line of keys into actions
pub fn parse_keys(line: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for token in line.split_whitespace() {
        parse_token(token, &mut actions)?;
    }
    Ok(actions)
}

fn parse_token(token: &str, out: &mut Vec<Action>) -> Result<()> {
    if let Ok(action) = token.parse::<Action>() {
        out.push(action);
        return Ok(());
    }

    // "-12.5" is a negative literal, not a subtraction; it replaces any entry
    // in progress so "5 -3" shows -3 rather than -53
    if let Some(magnitude) = token.strip_prefix('-') {
        if is_number(magnitude) {
            out.push(Action::ClearEntry);
            push_number(magnitude, out)?;
            out.push(Action::ToggleSign);
            return Ok(());
        }
    }

    if is_number(token) {
        return push_number(token, out);
    }

    push_compact(token, out)
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn push_number(number: &str, out: &mut Vec<Action>) -> Result<()> {
    for c in number.chars() {
        let action = match c {
            '.' => Action::Dot,
            _ => Action::Digit(Digit::try_from(c)?),
        };
        out.push(action);
    }
    Ok(())
}

/// Keys written without spaces: digits, single-character keys and words
fn push_compact(token: &str, out: &mut Vec<Action>) -> Result<()> {
    let mut word = String::new();

    for c in token.chars() {
        if c.is_alphabetic() {
            word.push(c);
            continue;
        }
        flush_word(&mut word, token, out)?;

        let action = match c {
            '.' => Action::Dot,
            c if c.is_ascii_digit() => Action::Digit(Digit::try_from(c)?),
            _ => match c.to_string().parse::<Action>() {
                Ok(action) => action,
                Err(_) => bail!("Unknown key '{}' in '{}'", c, token),
            },
        };
        out.push(action);
    }

    flush_word(&mut word, token, out)
}

fn flush_word(word: &mut String, token: &str, out: &mut Vec<Action>) -> Result<()> {
    if word.is_empty() {
        return Ok(());
    }
    match word.parse::<Action>() {
        Ok(action) => out.push(action),
        Err(_) => bail!("Unknown key '{}' in '{}'", word, token),
    }
    word.clear();
    Ok(())
}

/// Key spellings offered by tab completion
pub fn key_names() -> Vec<String> {
    let mut names: Vec<String> = ["+/-", "%", "=", ".", "c", "ce"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend(BinaryOp::ALL.iter().map(|op| op.symbol().to_string()));
    names.extend(ScientificFn::ALL.iter().map(|f| f.name().to_string()));
    names
}
