//! Pure verdict functions for the scored stages
//!
//! - Intro: single choice, equality
//! - Punch card: set equality over holes 1..=16
//! - Defects: mark count ≥ threshold, positions ignored
//! - Assembly: order-sensitive sequence equality after stripping decoration

use std::collections::BTreeSet;

use crate::types::{
    ChoiceAnswer, HoleSetAnswer, Mark, MarkThreshold, Measurement, SequenceAnswer, StageId,
    Verdict, VerdictReason,
};

/// Intro: the submitted option must equal the designated one
pub fn evaluate_choice(answer: &ChoiceAnswer, choice: &str) -> Verdict {
    if choice == answer.correct {
        Verdict::pass(
            StageId::Intro,
            VerdictReason::V100_INTRO_CORRECT,
            &answer.feedback.success,
        )
    } else {
        Verdict::fail(
            StageId::Intro,
            VerdictReason::V101_INTRO_WRONG,
            &answer.feedback.failure,
        )
    }
}

/// Punch card: selected holes must equal the expected set exactly
///
/// Order and duplicates in `selected` do not matter. Holes outside
/// 1..=max_hole make the submission unreadable rather than wrong.
pub fn evaluate_punch_card(answer: &HoleSetAnswer, selected: &[u32]) -> Verdict {
    if let Some(bad) = selected
        .iter()
        .find(|&&h| h == 0 || h > answer.max_hole)
    {
        return Verdict::invalid(
            StageId::PunchCard,
            VerdictReason::V302_PUNCH_CARD_HOLE_OUT_OF_RANGE,
            format!("孔位 {} 不在卡片上（1-{}）。", bad, answer.max_hole),
        );
    }

    let submitted: BTreeSet<u32> = selected.iter().copied().collect();
    if submitted == answer.holes {
        Verdict::pass(
            StageId::PunchCard,
            VerdictReason::V300_PUNCH_CARD_MATCH,
            &answer.feedback.success,
        )
    } else {
        let expected: Vec<u32> = answer.holes.iter().copied().collect();
        Verdict::fail(
            StageId::PunchCard,
            VerdictReason::V301_PUNCH_CARD_MISMATCH,
            format!(
                "{}正確是 {:?}，你選 {:?}。",
                answer.feedback.failure, expected, selected
            ),
        )
    }
}

/// Defects: any `threshold` or more marks pass
pub fn evaluate_defects(answer: &MarkThreshold, marks: &[Mark]) -> Verdict {
    let count = marks.len();
    let verdict = if count >= answer.threshold {
        Verdict::pass(
            StageId::Transistors,
            VerdictReason::V500_DEFECTS_MARKED,
            &answer.feedback.success,
        )
    } else {
        Verdict::fail(
            StageId::Transistors,
            VerdictReason::V501_DEFECTS_TOO_FEW,
            &answer.feedback.failure,
        )
    };
    verdict.with_measurement(Measurement::MarkCount { count })
}

/// Strip icon/label decoration: keep the trailing whitespace-separated token
///
/// "🔲 主機板" → "主機板", "CPU" → "CPU"
pub fn normalize_part(item: &str) -> String {
    item.split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Assembly: normalized order must equal the canonical order exactly
pub fn evaluate_assembly(answer: &SequenceAnswer, order: &[String]) -> Verdict {
    let normalized: Vec<String> = order.iter().map(|item| normalize_part(item)).collect();

    if normalized == answer.parts {
        Verdict::pass(
            StageId::Assembly,
            VerdictReason::V600_ASSEMBLY_CORRECT,
            &answer.feedback.success,
        )
    } else {
        Verdict::fail(
            StageId::Assembly,
            VerdictReason::V601_ASSEMBLY_WRONG_ORDER,
            format!("{}{:?}", answer.feedback.failure, normalized),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
