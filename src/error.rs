//! Error types
//!
//! Wrong answers are not errors: they come back as a Fail verdict.
//! These cover the shell around the stages.

use thiserror::Error;

/// Errors raised by the hosting shells (HTTP API, REPL, startup)
#[derive(Debug, Error)]
pub enum QuestError {
    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    #[error("Stage not found: {stage}")]
    StageNotFound { stage: String },

    #[error("Tube index out of range: {index} (bank has {count} tubes)")]
    TubeIndexOutOfRange { index: usize, count: usize },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Invalid arguments for {command}: {reason}")]
    InvalidArguments { command: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuestError {
    pub fn invalid_arguments(command: &str, reason: impl Into<String>) -> Self {
        QuestError::InvalidArguments {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for shell operations
pub type QuestResult<T> = Result<T, QuestError>;
