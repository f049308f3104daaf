//! Verdict outcome definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// How a submission was judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Submission matches the expected answer
    Pass,
    /// Submission does not match
    Fail,
    /// Action was out of order (e.g. finish before start)
    Warning,
    /// Submission could not be read (malformed input)
    Invalid,
    /// Not scored: simulation events, chat replies
    Info,
}

impl Outcome {
    /// Terminal color for this outcome
    pub fn color(&self) -> Color {
        match self {
            Outcome::Pass => Color::Green,
            Outcome::Fail => Color::Red,
            Outcome::Warning => Color::Yellow,
            Outcome::Invalid => Color::Magenta,
            Outcome::Info => Color::Cyan,
        }
    }

    /// Get emoji for outcome
    pub fn emoji(&self) -> &'static str {
        match self {
            Outcome::Pass => "✅",
            Outcome::Fail => "❌",
            Outcome::Warning => "⚠️",
            Outcome::Invalid => "🚫",
            Outcome::Info => "💬",
        }
    }

    /// Banner style the renderer should use
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Pass => "success",
            Outcome::Fail | Outcome::Invalid => "error",
            Outcome::Warning => "warning",
            Outcome::Info => "info",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Warning => "WARNING",
            Outcome::Invalid => "INVALID",
            Outcome::Info => "INFO",
        };
        write!(f, "{}", name)
    }
}
