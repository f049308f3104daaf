//! Verdict: the result of evaluating one submission

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Outcome, StageId, VerdictReason};

/// Optional measurement carried alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    /// Gear timer readout
    Elapsed { seconds: f64 },
    /// Which tube the simulation burned (0-based)
    BurnedTube { index: usize },
    /// Value read from the submitted binary digits
    BinaryValue { value: u32 },
    /// Marks counted on the IC image
    MarkCount { count: usize },
}

/// Outcome of one evaluation, consumed by the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub stage: StageId,
    pub outcome: Outcome,
    pub reason: VerdictReason,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement: Option<Measurement>,
    pub timestamp: DateTime<Utc>,
}

impl Verdict {
    pub fn new(
        stage: StageId,
        outcome: Outcome,
        reason: VerdictReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            outcome,
            reason,
            message: message.into(),
            measurement: None,
            timestamp: Utc::now(),
        }
    }

    pub fn pass(stage: StageId, reason: VerdictReason, message: impl Into<String>) -> Self {
        Self::new(stage, Outcome::Pass, reason, message)
    }

    pub fn fail(stage: StageId, reason: VerdictReason, message: impl Into<String>) -> Self {
        Self::new(stage, Outcome::Fail, reason, message)
    }

    pub fn warning(stage: StageId, reason: VerdictReason, message: impl Into<String>) -> Self {
        Self::new(stage, Outcome::Warning, reason, message)
    }

    pub fn invalid(stage: StageId, reason: VerdictReason, message: impl Into<String>) -> Self {
        Self::new(stage, Outcome::Invalid, reason, message)
    }

    pub fn info(stage: StageId, reason: VerdictReason, message: impl Into<String>) -> Self {
        Self::new(stage, Outcome::Info, reason, message)
    }

    /// Attach a measurement
    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurement = Some(measurement);
        self
    }

    pub fn is_pass(&self) -> bool {
        self.outcome.is_pass()
    }

    /// Elapsed seconds, if this verdict carries a timer readout
    pub fn elapsed_seconds(&self) -> Option<f64> {
        match self.measurement {
            Some(Measurement::Elapsed { seconds }) => Some(seconds),
            _ => None,
        }
    }

    /// Format for terminal display (colors honor `colored::control`)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{} [{}] {} | {}",
            self.outcome.emoji(),
            self.stage,
            self.message,
            self.reason.code()
        )
        .color(self.outcome.color())
        .to_string()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "stage={} | outcome={} | reason={} | message={}",
            self.stage,
            self.outcome,
            self.reason.code(),
            self.message
        )
    }
}
