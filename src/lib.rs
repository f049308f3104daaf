//! Lightquest: stage engine for the history-of-computing quiz
//!
//! Session store → stage controller → verdict, served over HTTP or a terminal REPL

pub mod config;
pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// SESSION SHAPE
// =============================================================================

/// Number of vacuum tubes in the reliability simulation
pub const TUBE_COUNT: usize = 6;

// =============================================================================
// STAGE CONSTANTS
// =============================================================================

/// Punch card holes are numbered 1..=16 (4×4 card)
pub const PUNCH_CARD_HOLES: u8 = 16;

/// Minimum number of marks for the defect stage to pass
pub const DEFECT_MARK_THRESHOLD: usize = 3;

/// Target value for the binary drill (fits in six tubes)
pub const BINARY_DRILL_TARGET: u32 = 45;

// =============================================================================
// STARTUP FETCH
// =============================================================================

/// Decorative header animation (Lottie JSON)
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets8.lottiefiles.com/packages/lf20_p8bfn5to.json";

/// Timeout for the animation fetch (milliseconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
