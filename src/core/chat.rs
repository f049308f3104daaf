//! Chatbot stage: literal question → answer lookup

use crate::core::SessionStore;
use crate::types::{ChatEntry, ChatLookup, StageId, Verdict, VerdictReason};

/// Answer `text` from the lookup table, logging both turns
///
/// Matching is exact (no trimming, no case folding). Empty input is
/// ignored and leaves the history untouched.
pub fn ask(store: &mut SessionStore, lookup: &ChatLookup, text: &str) -> Verdict {
    if text.is_empty() {
        return Verdict::warning(
            StageId::Chatbot,
            VerdictReason::V702_CHAT_EMPTY,
            "請先輸入問題。",
        );
    }

    let (reply, reason) = match lookup.answers.get(text) {
        Some(answer) => (answer.as_str(), VerdictReason::V700_CHAT_ANSWERED),
        None => (lookup.fallback.as_str(), VerdictReason::V701_CHAT_FALLBACK),
    };

    store.append_chat(ChatEntry::user(text));
    store.append_chat(ChatEntry::bot(reply));

    Verdict::info(StageId::Chatbot, reason, reply)
}

/// Drop the whole history
pub fn clear(store: &mut SessionStore) -> Verdict {
    store.clear_chat();
    Verdict::info(StageId::Chatbot, VerdictReason::V703_CHAT_CLEARED, "對話已清除。")
}
