//! Stage definitions and their expected answers
//!
//! Every expected answer is plain data. The catalog builds one of each at
//! startup and nothing mutates them afterwards.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The seven stages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    /// Prologue: why the computer came by ox cart
    Intro,
    /// Mechanical calculator, timed gear drag
    Gears,
    /// Hollerith punch card filter
    PunchCard,
    /// Vacuum tube reliability simulation
    VacuumTubes,
    /// Transistor / IC defect marking
    Transistors,
    /// Microprocessor era PC assembly
    Assembly,
    /// AI era chatbot
    Chatbot,
}

impl StageId {
    /// All stages in tab order
    pub const ALL: [StageId; 7] = [
        StageId::Intro,
        StageId::Gears,
        StageId::PunchCard,
        StageId::VacuumTubes,
        StageId::Transistors,
        StageId::Assembly,
        StageId::Chatbot,
    ];

    /// Position in the tab strip (0 = intro)
    pub fn number(&self) -> usize {
        match self {
            StageId::Intro => 0,
            StageId::Gears => 1,
            StageId::PunchCard => 2,
            StageId::VacuumTubes => 3,
            StageId::Transistors => 4,
            StageId::Assembly => 5,
            StageId::Chatbot => 6,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StageId::Intro => "intro",
            StageId::Gears => "gears",
            StageId::PunchCard => "punch_card",
            StageId::VacuumTubes => "vacuum_tubes",
            StageId::Transistors => "transistors",
            StageId::Assembly => "assembly",
            StageId::Chatbot => "chatbot",
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Success / failure text for a scored stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub success: String,
    pub failure: String,
}

impl Feedback {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }
}

/// Single choice among literal options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceAnswer {
    pub options: Vec<String>,
    pub correct: String,
    pub feedback: Feedback,
}

/// Messages for the self-reported gear timer (nothing is validated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerMessages {
    pub started: String,
    /// Prefix for the elapsed-time readout
    pub finished: String,
    pub not_started: String,
}

/// Exact set of punch card holes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSetAnswer {
    pub holes: BTreeSet<u32>,
    /// Holes are numbered 1..=max_hole
    pub max_hole: u32,
    pub feedback: Feedback,
}

/// Binary drill read off the tube bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryDrill {
    pub target: u32,
    /// Longest accepted digit string (one digit per tube)
    pub max_digits: usize,
    pub feedback: Feedback,
}

/// Minimum number of marks on the IC image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkThreshold {
    pub threshold: usize,
    pub feedback: Feedback,
}

/// Canonical ordering of parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceAnswer {
    pub parts: Vec<String>,
    /// Parts as the renderer shows them (icon prefix + name)
    pub decorated: Vec<String>,
    pub feedback: Feedback,
}

/// Literal question → answer table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLookup {
    pub answers: BTreeMap<String, String>,
    pub fallback: String,
}

/// What a stage checks submissions against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expected {
    Choice(ChoiceAnswer),
    Timed(TimerMessages),
    HoleSet(HoleSetAnswer),
    Simulation { tubes: usize, drill: BinaryDrill },
    MinMarks(MarkThreshold),
    Sequence(SequenceAnswer),
    Lookup(ChatLookup),
}

/// Illustration shown with a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageImage {
    pub url: String,
    pub caption: Option<String>,
}

/// One quiz unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDefinition {
    pub id: StageId,
    /// Tab label
    pub tab: String,
    pub header: String,
    pub prompt: String,
    pub image: Option<StageImage>,
    pub expected: Expected,
    /// History note shown under the stage
    pub note: String,
}

/// A point marked on the IC canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub x: f64,
    pub y: f64,
}

impl Mark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
