//! Session State Store
//!
//! Starts absent; `initialize` fills in defaults once and is a no-op after.
//! Reads on an absent store see the defaults, writes initialize first.

use std::time::Instant;

use crate::types::{ChatEntry, SessionSnapshot, SessionState};
use crate::TUBE_COUNT;

/// Per-session store, owned exclusively by its session
#[derive(Debug, Default)]
pub struct SessionStore {
    state: Option<SessionState>,
}

impl SessionStore {
    /// Create an absent store
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Set defaults if absent, return the live state
    pub fn initialize(&mut self) -> &mut SessionState {
        self.state.get_or_insert_with(SessionState::default)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    // =========================================================================
    // Timer
    // =========================================================================

    pub fn timer_start(&self) -> Option<Instant> {
        self.state.as_ref().and_then(|s| s.start_time)
    }

    pub fn set_timer_start(&mut self, instant: Instant) {
        self.initialize().start_time = Some(instant);
    }

    // =========================================================================
    // Tubes
    // =========================================================================

    pub fn tubes(&self) -> [bool; TUBE_COUNT] {
        self.state
            .as_ref()
            .map(|s| s.tubes)
            .unwrap_or([true; TUBE_COUNT])
    }

    /// Panics if `index >= TUBE_COUNT`
    pub fn set_tube_at(&mut self, index: usize, value: bool) {
        assert!(
            index < TUBE_COUNT,
            "tube index {} out of range (0..{})",
            index,
            TUBE_COUNT
        );
        self.initialize().tubes[index] = value;
    }

    // =========================================================================
    // Chat
    // =========================================================================

    pub fn chat_history(&self) -> &[ChatEntry] {
        self.state
            .as_ref()
            .map(|s| s.chat_history.as_slice())
            .unwrap_or(&[])
    }

    pub fn append_chat(&mut self, entry: ChatEntry) {
        self.initialize().chat_history.push(entry);
    }

    pub fn clear_chat(&mut self) {
        self.initialize().chat_history.clear();
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.state {
            Some(state) => state.snapshot(),
            None => SessionState::default().snapshot(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
