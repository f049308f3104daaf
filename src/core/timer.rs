//! Gear stage timer
//!
//! The drag itself is cosmetic; only the manual start/finish timing counts.

use std::time::Instant;

use crate::core::SessionStore;
use crate::types::{Measurement, StageId, TimerMessages, Verdict, VerdictReason};

/// Record `now` as the timer start (overwrites any earlier start)
pub fn start_timer(store: &mut SessionStore, messages: &TimerMessages, now: Instant) -> Verdict {
    store.set_timer_start(now);
    Verdict::info(StageId::Gears, VerdictReason::V200_TIMER_STARTED, &messages.started)
}

/// Report elapsed time since start; warn if start was never pressed
///
/// The start instant is kept, so finishing twice reports two readouts.
pub fn finish_timer(store: &SessionStore, messages: &TimerMessages, now: Instant) -> Verdict {
    match store.timer_start() {
        Some(start) => {
            let seconds = now.saturating_duration_since(start).as_secs_f64();
            Verdict::pass(
                StageId::Gears,
                VerdictReason::V201_TIMER_FINISHED,
                format!("{} {:.2} 秒", messages.finished, seconds),
            )
            .with_measurement(Measurement::Elapsed { seconds })
        }
        None => Verdict::warning(
            StageId::Gears,
            VerdictReason::V202_TIMER_NOT_STARTED,
            &messages.not_started,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::standard_catalog;
    use crate::types::Outcome;
    use std::time::Duration;

    #[test]
    fn test_finish_without_start_warns() {
        let store = SessionStore::new();
        let verdict = finish_timer(&store, &standard_catalog().timer, Instant::now());
        assert_eq!(verdict.outcome, Outcome::Warning);
        assert!(verdict.measurement.is_none());
    }

    #[test]
    fn test_finish_reports_elapsed() {
        let mut store = SessionStore::new();
        let messages = &standard_catalog().timer;
        let start = Instant::now();
        start_timer(&mut store, messages, start);

        let verdict = finish_timer(&store, messages, start + Duration::from_millis(2500));
        assert!(verdict.is_pass());
        assert_eq!(verdict.elapsed_seconds(), Some(2.5));
        assert_eq!(verdict.message, "用時 2.50 秒");
    }

    #[test]
    fn test_restart_moves_start() {
        let mut store = SessionStore::new();
        let messages = &standard_catalog().timer;
        let first = Instant::now();
        start_timer(&mut store, messages, first);
        start_timer(&mut store, messages, first + Duration::from_secs(10));

        let verdict = finish_timer(&store, messages, first + Duration::from_secs(11));
        assert_eq!(verdict.elapsed_seconds(), Some(1.0));
    }
}
