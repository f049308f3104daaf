//! Per-session state

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::types::ChatEntry;
use crate::TUBE_COUNT;

/// Everything a session remembers between actions
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Set by the gear stage's "start" button
    pub start_time: Option<Instant>,
    /// true = lit, false = broken
    pub tubes: [bool; TUBE_COUNT],
    pub chat_history: Vec<ChatEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            start_time: None,
            tubes: [true; TUBE_COUNT],
            chat_history: Vec::new(),
        }
    }
}

impl SessionState {
    /// Serializable view for renderers
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            timer_running: self.start_time.is_some(),
            tubes: self.tubes,
            tube_status: tube_labels(&self.tubes),
            tube_value: tubes_as_binary(&self.tubes),
            chat_history: self.chat_history.clone(),
        }
    }
}

/// "通" for a lit tube, "斷" for a broken one
pub fn tube_labels(tubes: &[bool; TUBE_COUNT]) -> Vec<String> {
    tubes
        .iter()
        .map(|&lit| if lit { "通" } else { "斷" }.to_string())
        .collect()
}

/// Read the tube bank as a binary number, tube 1 is the most significant bit
pub fn tubes_as_binary(tubes: &[bool; TUBE_COUNT]) -> u32 {
    tubes
        .iter()
        .fold(0u32, |acc, &lit| (acc << 1) | u32::from(lit))
}

/// What the API returns after each action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub timer_running: bool,
    pub tubes: [bool; TUBE_COUNT],
    pub tube_status: Vec<String>,
    pub tube_value: u32,
    pub chat_history: Vec<ChatEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SessionState::default();
        assert!(state.start_time.is_none());
        assert_eq!(state.tubes, [true; TUBE_COUNT]);
        assert!(state.chat_history.is_empty());
    }

    #[test]
    fn test_tubes_as_binary() {
        assert_eq!(tubes_as_binary(&[true; TUBE_COUNT]), 63);
        assert_eq!(tubes_as_binary(&[true, false, true, true, false, true]), 45);
        assert_eq!(tubes_as_binary(&[false; TUBE_COUNT]), 0);
    }

    #[test]
    fn test_snapshot_labels() {
        let mut state = SessionState::default();
        state.tubes[1] = false;
        let snap = state.snapshot();
        assert_eq!(snap.tube_status, vec!["通", "斷", "通", "通", "通", "通"]);
        assert!(!snap.timer_running);
    }
}
