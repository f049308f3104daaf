//! Reason codes attached to every verdict
//!
//! Hundreds digit = stage number (intro is 1), so codes sort by stage.

use serde::{Deserialize, Serialize};

/// Reason codes for all verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum VerdictReason {
    // =========================================================================
    // V1xx: Intro
    // =========================================================================
    /// Picked the designated option
    V100_INTRO_CORRECT,
    /// Picked any other option
    V101_INTRO_WRONG,

    // =========================================================================
    // V2xx: Gear timer
    // =========================================================================
    /// Timer start recorded
    V200_TIMER_STARTED,
    /// Elapsed time reported
    V201_TIMER_FINISHED,
    /// Finish pressed before start
    V202_TIMER_NOT_STARTED,

    // =========================================================================
    // V3xx: Punch card
    // =========================================================================
    /// Selected holes equal the expected set
    V300_PUNCH_CARD_MATCH,
    /// Missing or extra holes
    V301_PUNCH_CARD_MISMATCH,
    /// A hole number outside the card
    V302_PUNCH_CARD_HOLE_OUT_OF_RANGE,

    // =========================================================================
    // V4xx: Vacuum tubes
    // =========================================================================
    /// One tube flipped by the user
    V400_TUBE_TOGGLED,
    /// One tube forced dark by the simulation
    V401_TUBE_BURNED,
    /// Binary digits equal the drill target
    V410_BINARY_MATCH,
    /// Binary digits read as a different value
    V411_BINARY_MISMATCH,
    /// Input was not a binary number
    V412_BINARY_MALFORMED,

    // =========================================================================
    // V5xx: Defect marking
    // =========================================================================
    /// Enough marks placed
    V500_DEFECTS_MARKED,
    /// Fewer marks than the threshold
    V501_DEFECTS_TOO_FEW,

    // =========================================================================
    // V6xx: Assembly
    // =========================================================================
    /// Parts in canonical order
    V600_ASSEMBLY_CORRECT,
    /// Parts in any other order
    V601_ASSEMBLY_WRONG_ORDER,

    // =========================================================================
    // V7xx: Chatbot
    // =========================================================================
    /// Question found in the lookup table
    V700_CHAT_ANSWERED,
    /// Unknown question, fallback reply
    V701_CHAT_FALLBACK,
    /// Empty question ignored
    V702_CHAT_EMPTY,
    /// History cleared
    V703_CHAT_CLEARED,
}

impl VerdictReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::V100_INTRO_CORRECT => "V100_INTRO_CORRECT",
            Self::V101_INTRO_WRONG => "V101_INTRO_WRONG",
            Self::V200_TIMER_STARTED => "V200_TIMER_STARTED",
            Self::V201_TIMER_FINISHED => "V201_TIMER_FINISHED",
            Self::V202_TIMER_NOT_STARTED => "V202_TIMER_NOT_STARTED",
            Self::V300_PUNCH_CARD_MATCH => "V300_PUNCH_CARD_MATCH",
            Self::V301_PUNCH_CARD_MISMATCH => "V301_PUNCH_CARD_MISMATCH",
            Self::V302_PUNCH_CARD_HOLE_OUT_OF_RANGE => "V302_PUNCH_CARD_HOLE_OUT_OF_RANGE",
            Self::V400_TUBE_TOGGLED => "V400_TUBE_TOGGLED",
            Self::V401_TUBE_BURNED => "V401_TUBE_BURNED",
            Self::V410_BINARY_MATCH => "V410_BINARY_MATCH",
            Self::V411_BINARY_MISMATCH => "V411_BINARY_MISMATCH",
            Self::V412_BINARY_MALFORMED => "V412_BINARY_MALFORMED",
            Self::V500_DEFECTS_MARKED => "V500_DEFECTS_MARKED",
            Self::V501_DEFECTS_TOO_FEW => "V501_DEFECTS_TOO_FEW",
            Self::V600_ASSEMBLY_CORRECT => "V600_ASSEMBLY_CORRECT",
            Self::V601_ASSEMBLY_WRONG_ORDER => "V601_ASSEMBLY_WRONG_ORDER",
            Self::V700_CHAT_ANSWERED => "V700_CHAT_ANSWERED",
            Self::V701_CHAT_FALLBACK => "V701_CHAT_FALLBACK",
            Self::V702_CHAT_EMPTY => "V702_CHAT_EMPTY",
            Self::V703_CHAT_CLEARED => "V703_CHAT_CLEARED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::V100_INTRO_CORRECT => "Correct option chosen",
            Self::V101_INTRO_WRONG => "Wrong option chosen",
            Self::V200_TIMER_STARTED => "Timer started",
            Self::V201_TIMER_FINISHED => "Elapsed time measured",
            Self::V202_TIMER_NOT_STARTED => "Timer was never started",
            Self::V300_PUNCH_CARD_MATCH => "Hole set matches",
            Self::V301_PUNCH_CARD_MISMATCH => "Hole set differs",
            Self::V302_PUNCH_CARD_HOLE_OUT_OF_RANGE => "Hole number outside the card",
            Self::V400_TUBE_TOGGLED => "Tube toggled",
            Self::V401_TUBE_BURNED => "Tube burned out",
            Self::V410_BINARY_MATCH => "Binary value matches",
            Self::V411_BINARY_MISMATCH => "Binary value differs",
            Self::V412_BINARY_MALFORMED => "Not a binary number",
            Self::V500_DEFECTS_MARKED => "Enough defects marked",
            Self::V501_DEFECTS_TOO_FEW => "Too few defects marked",
            Self::V600_ASSEMBLY_CORRECT => "Assembly order correct",
            Self::V601_ASSEMBLY_WRONG_ORDER => "Assembly order wrong",
            Self::V700_CHAT_ANSWERED => "Canned answer found",
            Self::V701_CHAT_FALLBACK => "Fallback reply",
            Self::V702_CHAT_EMPTY => "Empty question ignored",
            Self::V703_CHAT_CLEARED => "Chat history cleared",
        }
    }
}

impl std::fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_and_description() {
        assert_eq!(
            VerdictReason::V401_TUBE_BURNED.to_string(),
            "V401_TUBE_BURNED: Tube burned out"
        );
        assert_eq!(
            VerdictReason::V702_CHAT_EMPTY.to_string(),
            "V702_CHAT_EMPTY: Empty question ignored"
        );
    }
}
