//! Vacuum tube reliability simulation
//!
//! Not scored: toggles and burns return Info verdicts. The binary drill
//! reads the tubes as bits (lit = 1) and is the one scored part here.

use rand::Rng;

use crate::core::SessionStore;
use crate::types::{BinaryDrill, Measurement, StageId, Verdict, VerdictReason};
use crate::TUBE_COUNT;

/// Flip tube `index` unconditionally. Panics if out of range.
pub fn toggle_tube(store: &mut SessionStore, index: usize) -> Verdict {
    let lit = !store.tubes()[index];
    store.set_tube_at(index, lit);
    let label = if lit { "💡 通電" } else { "💥 斷電" };
    Verdict::info(
        StageId::VacuumTubes,
        VerdictReason::V400_TUBE_TOGGLED,
        format!("管子{}：{}", index + 1, label),
    )
}

/// Force tube `index` dark and report it, even if it was already dark
pub fn burn_tube_at(store: &mut SessionStore, index: usize) -> Verdict {
    store.set_tube_at(index, false);
    Verdict::info(
        StageId::VacuumTubes,
        VerdictReason::V401_TUBE_BURNED,
        format!("管子{}已燒壞！", index + 1),
    )
    .with_measurement(Measurement::BurnedTube { index })
}

/// Burn a tube picked uniformly over all positions, lit or not
pub fn burn_random_tube<R: Rng + ?Sized>(store: &mut SessionStore, rng: &mut R) -> Verdict {
    let index = rng.gen_range(0..TUBE_COUNT);
    burn_tube_at(store, index)
}

/// Binary drill: `digits` must spell the drill target in base 2
pub fn evaluate_binary(drill: &BinaryDrill, digits: &str) -> Verdict {
    let digits = digits.trim();

    if digits.is_empty() || !digits.chars().all(|c| c == '0' || c == '1') {
        return Verdict::invalid(
            StageId::VacuumTubes,
            VerdictReason::V412_BINARY_MALFORMED,
            format!("「{}」不是二進位數字，請只輸入 0 與 1。", digits),
        );
    }
    if digits.len() > drill.max_digits {
        return Verdict::invalid(
            StageId::VacuumTubes,
            VerdictReason::V412_BINARY_MALFORMED,
            format!("最多只有 {} 隻真空管，請輸入不超過 {} 位。", drill.max_digits, drill.max_digits),
        );
    }

    // A custom drill may allow more digits than fit in a u32
    let value = match u32::from_str_radix(digits, 2) {
        Ok(v) => v,
        Err(_) => {
            return Verdict::invalid(
                StageId::VacuumTubes,
                VerdictReason::V412_BINARY_MALFORMED,
                format!("「{}」太長了。", digits),
            )
        }
    };

    let verdict = if value == drill.target {
        Verdict::pass(
            StageId::VacuumTubes,
            VerdictReason::V410_BINARY_MATCH,
            &drill.feedback.success,
        )
    } else {
        Verdict::fail(
            StageId::VacuumTubes,
            VerdictReason::V411_BINARY_MISMATCH,
            format!(
                "{}{} 代表 {}，目標是 {}。",
                drill.feedback.failure, digits, value, drill.target
            ),
        )
    };
    verdict.with_measurement(Measurement::BinaryValue { value })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::standard_catalog;
    use crate::types::Outcome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_toggle_flips_only_one() {
        let mut store = SessionStore::new();
        store.initialize();
        toggle_tube(&mut store, 3);
        assert_eq!(store.tubes(), [true, true, true, false, true, true]);
        toggle_tube(&mut store, 3);
        assert_eq!(store.tubes(), [true; TUBE_COUNT]);
    }

    #[test]
    fn test_burn_reports_already_dark_tube() {
        let mut store = SessionStore::new();
        burn_tube_at(&mut store, 0);
        let verdict = burn_tube_at(&mut store, 0);
        assert_eq!(verdict.measurement, Some(Measurement::BurnedTube { index: 0 }));
        assert_eq!(verdict.message, "管子1已燒壞！");
        assert_eq!(store.tubes(), [false, true, true, true, true, true]);
    }

    #[test]
    fn test_burn_random_matches_seeded_pick() {
        let mut expected_rng = StdRng::seed_from_u64(7);
        let expected: usize = expected_rng.gen_range(0..TUBE_COUNT);

        let mut store = SessionStore::new();
        let mut rng = StdRng::seed_from_u64(7);
        let verdict = burn_random_tube(&mut store, &mut rng);

        assert_eq!(verdict.measurement, Some(Measurement::BurnedTube { index: expected }));
        let dark: Vec<usize> = (0..TUBE_COUNT).filter(|&i| !store.tubes()[i]).collect();
        assert_eq!(dark, vec![expected]);
    }

    #[test]
    fn test_binary_drill() {
        let drill = &standard_catalog().binary_drill;
        assert!(evaluate_binary(drill, "101101").is_pass());
        assert!(evaluate_binary(drill, " 101101 ").is_pass());

        let wrong = evaluate_binary(drill, "111");
        assert_eq!(wrong.outcome, Outcome::Fail);
        assert_eq!(wrong.measurement, Some(Measurement::BinaryValue { value: 7 }));
    }

    #[test]
    fn test_binary_drill_malformed_input() {
        let drill = &standard_catalog().binary_drill;
        for input in ["", "12", "10a1", "1O1", "1111111"] {
            let verdict = evaluate_binary(drill, input);
            assert_eq!(verdict.outcome, Outcome::Invalid, "input {:?}", input);
            assert_eq!(verdict.reason, VerdictReason::V412_BINARY_MALFORMED);
        }
    }
}
