//! User actions dispatched to the stage controller

use serde::{Deserialize, Serialize};

use crate::types::{Mark, StageId};

/// One user interaction, as sent by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SubmitIntro { choice: String },
    StartTimer,
    FinishTimer,
    SubmitPunchCard { holes: Vec<u32> },
    /// 0-based tube index
    ToggleTube { index: usize },
    BurnTube,
    SubmitBinary { digits: String },
    SubmitDefects { marks: Vec<Mark> },
    SubmitAssembly { order: Vec<String> },
    AskChat { text: String },
    ClearChat,
}

impl Action {
    /// Stage this action belongs to
    pub fn stage(&self) -> StageId {
        match self {
            Action::SubmitIntro { .. } => StageId::Intro,
            Action::StartTimer | Action::FinishTimer => StageId::Gears,
            Action::SubmitPunchCard { .. } => StageId::PunchCard,
            Action::ToggleTube { .. } | Action::BurnTube | Action::SubmitBinary { .. } => {
                StageId::VacuumTubes
            }
            Action::SubmitDefects { .. } => StageId::Transistors,
            Action::SubmitAssembly { .. } => StageId::Assembly,
            Action::AskChat { .. } | Action::ClearChat => StageId::Chatbot,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::SubmitIntro { .. } => "submit_intro",
            Action::StartTimer => "start_timer",
            Action::FinishTimer => "finish_timer",
            Action::SubmitPunchCard { .. } => "submit_punch_card",
            Action::ToggleTube { .. } => "toggle_tube",
            Action::BurnTube => "burn_tube",
            Action::SubmitBinary { .. } => "submit_binary",
            Action::SubmitDefects { .. } => "submit_defects",
            Action::SubmitAssembly { .. } => "submit_assembly",
            Action::AskChat { .. } => "ask_chat",
            Action::ClearChat => "clear_chat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged() {
        let action: Action =
            serde_json::from_str(r#"{"action": "submit_punch_card", "holes": [2, 5]}"#).unwrap();
        assert_eq!(action, Action::SubmitPunchCard { holes: vec![2, 5] });
        assert_eq!(action.stage(), StageId::PunchCard);

        let action: Action = serde_json::from_str(r#"{"action": "burn_tube"}"#).unwrap();
        assert_eq!(action, Action::BurnTube);
    }
}
