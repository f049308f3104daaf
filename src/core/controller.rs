//! Stage Controller: dispatches one action against one session's store
//!
//! Handlers are functions of (store, action) → verdict. The store and the
//! random source are injected by the caller, so sessions never share state.

use std::time::Instant;

use rand::Rng;
use tracing::debug;

use crate::core::catalog::{standard_catalog, Catalog};
use crate::core::{chat, quiz, timer, tubes, SessionStore};
use crate::types::{Action, Verdict};

/// Dispatch shell over a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct StageController<'a> {
    catalog: &'a Catalog,
}

impl Default for StageController<'static> {
    fn default() -> Self {
        Self::new(standard_catalog())
    }
}

impl<'a> StageController<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Handle one action using the current instant for the timer
    pub fn handle<R: Rng + ?Sized>(
        &self,
        store: &mut SessionStore,
        rng: &mut R,
        action: Action,
    ) -> Verdict {
        self.handle_at(store, rng, action, Instant::now())
    }

    /// Handle one action with an explicit clock reading
    ///
    /// `ToggleTube` with an index outside the bank panics; shells validate
    /// indices before dispatching.
    pub fn handle_at<R: Rng + ?Sized>(
        &self,
        store: &mut SessionStore,
        rng: &mut R,
        action: Action,
        now: Instant,
    ) -> Verdict {
        store.initialize();
        let name = action.name();

        let verdict = match action {
            Action::SubmitIntro { choice } => quiz::evaluate_choice(&self.catalog.intro, &choice),
            Action::StartTimer => timer::start_timer(store, &self.catalog.timer, now),
            Action::FinishTimer => timer::finish_timer(store, &self.catalog.timer, now),
            Action::SubmitPunchCard { holes } => {
                quiz::evaluate_punch_card(&self.catalog.punch_card, &holes)
            }
            Action::ToggleTube { index } => tubes::toggle_tube(store, index),
            Action::BurnTube => tubes::burn_random_tube(store, rng),
            Action::SubmitBinary { digits } => {
                tubes::evaluate_binary(&self.catalog.binary_drill, &digits)
            }
            Action::SubmitDefects { marks } => quiz::evaluate_defects(&self.catalog.defects, &marks),
            Action::SubmitAssembly { order } => {
                quiz::evaluate_assembly(&self.catalog.assembly, &order)
            }
            Action::AskChat { text } => chat::ask(store, &self.catalog.chat, &text),
            Action::ClearChat => chat::clear(store),
        };

        debug!(
            action = name,
            stage = %verdict.stage,
            outcome = %verdict.outcome,
            reason = %verdict.reason,
            "Action handled"
        );
        verdict
    }
}

// =============================================================================
// TESTS
// =============================================================================
