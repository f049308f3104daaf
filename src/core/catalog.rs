//! Stage catalog: prompts, expected answers and feedback text
//!
//! Built once; controllers borrow it. A custom catalog can be passed to
//! `StageController::new` to change answers without touching control flow.

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;

use crate::types::{
    BinaryDrill, ChatLookup, ChoiceAnswer, Expected, Feedback, HoleSetAnswer, MarkThreshold,
    SequenceAnswer, StageDefinition, StageId, StageImage, TimerMessages,
};
use crate::{BINARY_DRILL_TARGET, DEFECT_MARK_THRESHOLD, PUNCH_CARD_HOLES, TUBE_COUNT};

lazy_static! {
    static ref STANDARD: Catalog = Catalog::standard();
}

/// The built-in catalog
pub fn standard_catalog() -> &'static Catalog {
    &STANDARD
}

/// Expected answers for every stage plus the presentation text
#[derive(Debug, Clone)]
pub struct Catalog {
    pub intro: ChoiceAnswer,
    pub timer: TimerMessages,
    pub punch_card: HoleSetAnswer,
    pub binary_drill: BinaryDrill,
    pub defects: MarkThreshold,
    pub assembly: SequenceAnswer,
    pub chat: ChatLookup,
    stages: Vec<StageDefinition>,
}

impl Catalog {
    /// Build the standard seven-stage catalog
    pub fn standard() -> Self {
        let intro = ChoiceAnswer {
            options: vec![
                "真空管過於脆弱，怕震動".to_string(),
                "那是當時最先進的物流方式".to_string(),
                "為了展示傳統與現代結合".to_string(),
            ],
            correct: "真空管過於脆弱，怕震動".to_string(),
            feedback: Feedback::new(
                "👍 正確！真空管又重又怕震，需要穩定慢運。",
                "❌ 再想想真空管本身的特性。",
            ),
        };

        let timer = TimerMessages {
            started: "⏱️ 計時開始！".to_string(),
            finished: "用時".to_string(),
            not_started: "請先按「開始計時」。".to_string(),
        };

        let punch_card = HoleSetAnswer {
            holes: BTreeSet::from([2, 5, 7, 12]),
            max_hole: u32::from(PUNCH_CARD_HOLES),
            feedback: Feedback::new("✅ 正確！已篩選出所有符合條件的資料。", "❌ 錯誤。"),
        };

        let binary_drill = BinaryDrill {
            target: BINARY_DRILL_TARGET,
            max_digits: TUBE_COUNT,
            feedback: Feedback::new("✅ 正確！亮著的真空管就是 1。", "❌ 數值不符。"),
        };

        let defects = MarkThreshold {
            threshold: DEFECT_MARK_THRESHOLD,
            feedback: Feedback::new("✅ 偵測到你標記了至少3處缺陷！", "❌ 請標記至少3處缺陷。"),
        };

        let assembly = SequenceAnswer {
            parts: ["CPU", "RAM", "主機板", "儲存裝置", "電源", "I/O"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            decorated: ["🧠 CPU", "💾 RAM", "🔲 主機板", "🗄️ 儲存裝置", "🔌 電源", "🖱️ I/O"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            feedback: Feedback::new("🎉 PC 組裝成功！", "❌ 順序錯誤："),
        };

        let chat = ChatLookup {
            answers: BTreeMap::from([
                (
                    "什麼是馮紐曼架構".to_string(),
                    "馮紐曼架構包含輸入、記憶、控制、運算、輸出五大模組。".to_string(),
                ),
                (
                    "電晶體".to_string(),
                    "電晶體是一種半導體元件，可控制電流開/關。".to_string(),
                ),
            ]),
            fallback: "這是一個有趣的問題，我會繼續學習！".to_string(),
        };

        Self::from_answers(intro, timer, punch_card, binary_drill, defects, assembly, chat)
    }

    /// Assemble a catalog from answer data; presentation text stays standard
    pub fn from_answers(
        intro: ChoiceAnswer,
        timer: TimerMessages,
        punch_card: HoleSetAnswer,
        binary_drill: BinaryDrill,
        defects: MarkThreshold,
        assembly: SequenceAnswer,
        chat: ChatLookup,
    ) -> Self {
        let stages = vec![
            stage(
                StageId::Intro,
                "序幕：牛車引言",
                "序幕：牛車載電腦",
                "為何要用牛車運送？",
                Some(("https://i.imgur.com/3xOkeS3.jpg", Some("1962 IBM 650 牛車運抵交大"))),
                Expected::Choice(intro.clone()),
                "",
            ),
            stage(
                StageId::Gears,
                "關卡1：齒輪核心",
                "關卡1：機械計算器—齒輪核心",
                "請拖拉小齒輪到「3」和「5」的位置，並計時完成。",
                None,
                Expected::Timed(timer.clone()),
                "**說明**：Pascal 的機械加法器由齒輪啮合實現加減，但體積大且易卡死。",
            ),
            stage(
                StageId::PunchCard,
                "關卡2：資料之眼",
                "關卡2：打孔卡片—資料之眼",
                "條件：身高>160且年齡15-16，請在4×4卡片上打孔（選擇編號）。",
                None,
                Expected::HoleSet(punch_card.clone()),
                "**1860** Hollerith 發明打孔卡，自動化數據處理由此開始。",
            ),
            stage(
                StageId::VacuumTubes,
                "關卡3：能量之心",
                "關卡3：真空管模擬—能量之心",
                "勾選代表「通電(1)」；按「燒毀一隻」模擬真空管故障。",
                None,
                Expected::Simulation {
                    tubes: TUBE_COUNT,
                    drill: binary_drill.clone(),
                },
                "**1940s** ENIAC 用真空管運算，但耗能高、易故障。",
            ),
            stage(
                StageId::Transistors,
                "關卡4：微縮之力",
                "關卡4：電晶體與IC—微縮之力",
                "在右圖上點擊 3 處缺陷，用紅點標記。",
                Some(("https://i.imgur.com/1aK5nQK.png", Some("積體電路示意圖"))),
                Expected::MinMarks(defects.clone()),
                "**1958** Kilby & Noyce 發明IC，大幅縮小元件。",
            ),
            stage(
                StageId::Assembly,
                "關卡5：組裝之魂",
                "關卡5：微處理器與PC—組裝之魂",
                "請將零件拖曳到此處，完成PC組裝",
                None,
                Expected::Sequence(assembly.clone()),
                "**1971** Intel 4004 首顆微處理器帶來個人電腦革命。",
            ),
            stage(
                StageId::Chatbot,
                "關卡6：智能之眼",
                "關卡6：AI時代—智能之眼",
                "問AI一個問題",
                None,
                Expected::Lookup(chat.clone()),
                "**2010s** 深度學習與Transformer引領生成式AI風潮。",
            ),
        ];

        Self {
            intro,
            timer,
            punch_card,
            binary_drill,
            defects,
            assembly,
            chat,
            stages,
        }
    }

    /// All stage definitions in tab order
    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    /// Look up one stage by id
    pub fn definition(&self, id: StageId) -> Option<&StageDefinition> {
        self.stages.iter().find(|s| s.id == id)
    }
}

fn stage(
    id: StageId,
    tab: &str,
    header: &str,
    prompt: &str,
    image: Option<(&str, Option<&str>)>,
    expected: Expected,
    note: &str,
) -> StageDefinition {
    StageDefinition {
        id,
        tab: tab.to_string(),
        header: header.to_string(),
        prompt: prompt.to_string(),
        image: image.map(|(url, caption)| StageImage {
            url: url.to_string(),
            caption: caption.map(str::to_string),
        }),
        expected,
        note: note.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
