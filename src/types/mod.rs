//! Core types for Lightquest

mod action;
mod chat;
mod outcome;
mod reason;
mod session;
mod stage;
mod verdict;

pub use action::Action;
pub use chat::{ChatEntry, Speaker};
pub use outcome::Outcome;
pub use reason::VerdictReason;
pub use session::{tube_labels, tubes_as_binary, SessionSnapshot, SessionState};
pub use stage::{
    BinaryDrill, ChatLookup, ChoiceAnswer, Expected, Feedback, HoleSetAnswer, Mark,
    MarkThreshold, SequenceAnswer, StageDefinition, StageId, StageImage, TimerMessages,
};
pub use verdict::{Measurement, Verdict};
