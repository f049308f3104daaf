//! Terminal command parser
//!
//! One command per line. Tube and intro numbers are 1-based, as printed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::catalog::Catalog;
use crate::error::{QuestError, QuestResult};
use crate::types::{Action, Mark};
use crate::TUBE_COUNT;

lazy_static! {
    // "x,y" pairs, optional parentheses and decimals: (12, 40.5) 30,7
    static ref RE_MARK: Regex = Regex::new(
        r"\(?\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\)?"
    ).unwrap();
}

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch to the stage controller
    Act(Action),
    /// Print the session snapshot
    Status,
    /// List the stages
    Stages,
    Help,
    Quit,
}

/// Usage text for the REPL
pub const HELP: &str = "\
Commands:
  intro N              answer the prologue (1-3)
  start | finish       gear stage timer
  punch 2 5 7 12       punch card holes (1-16)
  toggle N             flip tube N (1-6)
  burn                 burn a random tube
  binary 101101        binary drill
  mark x,y x,y x,y     mark defects on the IC image
  assemble A, B, ...   PC assembly order (comma or space separated)
  ask TEXT             ask the chatbot
  clear                clear chat history
  status | stages | help | quit";

/// Parse one line into a command
pub fn parse_command(line: &str, catalog: &Catalog) -> QuestResult<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        "status" => Command::Status,
        "stages" => Command::Stages,
        "intro" => Command::Act(Action::SubmitIntro {
            choice: parse_choice(rest, catalog)?,
        }),
        "start" => Command::Act(Action::StartTimer),
        "finish" => Command::Act(Action::FinishTimer),
        "punch" => Command::Act(Action::SubmitPunchCard {
            holes: parse_numbers(head, rest)?,
        }),
        "toggle" => Command::Act(Action::ToggleTube {
            index: parse_tube(rest)?,
        }),
        "burn" => Command::Act(Action::BurnTube),
        "binary" => Command::Act(Action::SubmitBinary {
            digits: rest.to_string(),
        }),
        "mark" => Command::Act(Action::SubmitDefects {
            marks: parse_marks(rest)?,
        }),
        "assemble" => Command::Act(Action::SubmitAssembly {
            order: split_items(rest),
        }),
        "ask" => Command::Act(Action::AskChat {
            text: rest.to_string(),
        }),
        "clear" => Command::Act(Action::ClearChat),
        _ => {
            return Err(QuestError::UnknownCommand {
                command: head.to_string(),
            })
        }
    };
    Ok(command)
}

/// Option number (1-based) or the literal option text
fn parse_choice(rest: &str, catalog: &Catalog) -> QuestResult<String> {
    if rest.is_empty() {
        return Err(QuestError::invalid_arguments("intro", "missing option"));
    }
    match rest.parse::<usize>() {
        Ok(n) => catalog
            .intro
            .options
            .get(n.wrapping_sub(1))
            .cloned()
            .ok_or_else(|| {
                QuestError::invalid_arguments(
                    "intro",
                    format!("option must be 1-{}", catalog.intro.options.len()),
                )
            }),
        Err(_) => Ok(rest.to_string()),
    }
}

fn parse_numbers(command: &str, rest: &str) -> QuestResult<Vec<u32>> {
    rest.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| QuestError::invalid_arguments(command, format!("{:?} is not a number", s)))
        })
        .collect()
}

/// 1-based tube number → 0-based index
fn parse_tube(rest: &str) -> QuestResult<usize> {
    let n: usize = rest
        .parse()
        .map_err(|_| QuestError::invalid_arguments("toggle", "expected a tube number"))?;
    if n == 0 || n > TUBE_COUNT {
        return Err(QuestError::invalid_arguments(
            "toggle",
            format!("tube must be 1-{}", TUBE_COUNT),
        ));
    }
    Ok(n - 1)
}

/// Every non-blank stretch of `rest` must be an x,y pair
fn parse_marks(rest: &str) -> QuestResult<Vec<Mark>> {
    let mut marks = Vec::new();
    let mut cursor = 0;
    for caps in RE_MARK.captures_iter(rest) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        check_mark_gap(&rest[cursor..whole.start()])?;
        cursor = whole.end();

        let x = caps[1]
            .parse::<f64>()
            .map_err(|_| QuestError::invalid_arguments("mark", "bad x coordinate"))?;
        let y = caps[2]
            .parse::<f64>()
            .map_err(|_| QuestError::invalid_arguments("mark", "bad y coordinate"))?;
        marks.push(Mark::new(x, y));
    }
    check_mark_gap(&rest[cursor..])?;
    Ok(marks)
}

/// Text between two pairs may only be whitespace
fn check_mark_gap(gap: &str) -> QuestResult<()> {
    let gap = gap.trim();
    if gap.is_empty() {
        Ok(())
    } else {
        Err(QuestError::invalid_arguments(
            "mark",
            format!("{:?} is not an x,y pair", gap),
        ))
    }
}

/// Comma-separated if any comma is present (keeps "🧠 CPU" together), else whitespace
fn split_items(rest: &str) -> Vec<String> {
    if rest.contains(',') {
        rest.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        rest.split_whitespace().map(str::to_string).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
