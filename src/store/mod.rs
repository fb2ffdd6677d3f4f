//! Application state store: named message-history lists with write-through
//! persistence.
//!
//! The store owns one ordered message list per [`HistoryKind`]. Views read
//! lists through [`HistoryStore::history`] and submit whole-list replacements
//! through [`HistoryStore::replace_history`]; nothing else writes to the
//! backing medium. Every replacement is mirrored to the medium as a JSON
//! array under the kind's storage key, and [`HistoryStore::rehydrate`] loads
//! those keys back at startup.

pub mod medium;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub use medium::{FileMedium, MemoryMedium, StorageMedium};

/// The conversational contexts that keep a persisted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HistoryKind {
    MakePrompt,
    AiAnswer,
    AiTalk,
}

impl HistoryKind {
    pub const ALL: [HistoryKind; 3] = [
        HistoryKind::MakePrompt,
        HistoryKind::AiAnswer,
        HistoryKind::AiTalk,
    ];

    /// Key under which this list is stored in the persisted medium.
    pub fn storage_key(self) -> &'static str {
        match self {
            HistoryKind::MakePrompt => "makePromptHistory",
            HistoryKind::AiAnswer => "aiAnswerHistory",
            HistoryKind::AiTalk => "aiTalkHistory",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            HistoryKind::MakePrompt => "Make Prompt",
            HistoryKind::AiAnswer => "AI Answer",
            HistoryKind::AiTalk => "AI Talk",
        }
    }

    /// Kind addressed by a route slug such as `ai-talk`.
    pub fn from_slug(slug: &str) -> Option<HistoryKind> {
        match slug {
            "make-prompt" => Some(HistoryKind::MakePrompt),
            "ai-answer" => Some(HistoryKind::AiAnswer),
            "ai-talk" => Some(HistoryKind::AiTalk),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message record. The store never inspects the fields; it serializes and
/// deserializes whole lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// In-memory history lists plus their write-through persistence.
///
/// Constructed once at startup and owned by the application state; lives for
/// the whole process. A medium failure never propagates out of the store:
/// writes are fire-and-forget (in-memory state stays authoritative) and
/// unreadable or malformed persisted values fall back to an empty list,
/// independently per key.
pub struct HistoryStore {
    lists: BTreeMap<HistoryKind, Vec<ChatMessage>>,
    medium: Box<dyn StorageMedium>,
}

impl HistoryStore {
    /// Create a store with every known list empty. Call
    /// [`HistoryStore::rehydrate`] before the first render to load persisted
    /// state.
    pub fn new(medium: Box<dyn StorageMedium>) -> Self {
        let lists = HistoryKind::ALL
            .iter()
            .map(|&kind| (kind, Vec::new()))
            .collect();
        Self { lists, medium }
    }

    /// Current in-memory list for `kind`.
    pub fn history(&self, kind: HistoryKind) -> &[ChatMessage] {
        self.lists.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the entire list for `kind` and mirror it to the medium.
    ///
    /// The in-memory assignment always takes effect; serialization or medium
    /// failures are logged and otherwise ignored.
    pub fn replace_history(&mut self, kind: HistoryKind, messages: Vec<ChatMessage>) {
        let key = kind.storage_key();
        match serde_json::to_string(&messages) {
            Ok(json) => {
                if let Err(e) = self.medium.write(key, &json) {
                    warn!(key, error = %e, "history write failed, keeping in-memory state");
                }
            }
            Err(e) => {
                warn!(key, error = %e, "history serialization failed, keeping in-memory state");
            }
        }
        self.lists.insert(kind, messages);
    }

    /// Load every known list from the medium, replacing the in-memory state.
    ///
    /// Each key is handled independently: an absent, unreadable, or malformed
    /// value resets only that list to empty. Idempotent; the last successful
    /// read wins.
    pub fn rehydrate(&mut self) {
        for kind in HistoryKind::ALL {
            let key = kind.storage_key();
            let raw = match self.medium.read(key) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(key, error = %e, "history read failed, starting empty");
                    None
                }
            };
            let messages = match raw {
                Some(json) => match serde_json::from_str(&json) {
                    Ok(messages) => messages,
                    Err(e) => {
                        warn!(key, error = %e, "malformed history, starting empty");
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            self.lists.insert(kind, messages);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn memory_store() -> (HistoryStore, MemoryMedium) {
        let medium = MemoryMedium::new();
        (HistoryStore::new(Box::new(medium.clone())), medium)
    }

    #[test]
    fn starts_empty_for_every_kind() {
        let (store, _) = memory_store();
        for kind in HistoryKind::ALL {
            assert!(store.history(kind).is_empty());
        }
    }

    #[test]
    fn replace_then_get_round_trips() {
        let (mut store, _) = memory_store();
        for kind in HistoryKind::ALL {
            let messages = vec![
                ChatMessage::user(format!("question for {}", kind.storage_key())),
                ChatMessage {
                    role: Role::Assistant,
                    text: "answer".to_string(),
                },
            ];
            store.replace_history(kind, messages.clone());
            assert_eq!(store.history(kind), messages.as_slice());
        }
    }

    #[test]
    fn replacement_is_whole_list_not_a_merge() {
        let (mut store, _) = memory_store();
        store.replace_history(HistoryKind::AiTalk, vec![ChatMessage::user("old")]);
        store.replace_history(HistoryKind::AiTalk, vec![ChatMessage::user("new")]);
        assert_eq!(
            store.history(HistoryKind::AiTalk),
            &[ChatMessage::user("new")]
        );
    }

    #[test]
    fn rehydrate_restores_after_restart() {
        let (mut store, medium) = memory_store();
        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage {
                role: Role::Assistant,
                text: "hi".to_string(),
            },
        ];
        store.replace_history(HistoryKind::MakePrompt, messages.clone());

        // Fresh store over the same medium simulates a new process.
        let mut restarted = HistoryStore::new(Box::new(medium));
        assert!(restarted.history(HistoryKind::MakePrompt).is_empty());
        restarted.rehydrate();
        assert_eq!(restarted.history(HistoryKind::MakePrompt), messages.as_slice());
    }

    #[test]
    fn rehydrate_on_empty_medium_yields_empty_lists() {
        let (mut store, _) = memory_store();
        store.rehydrate();
        for kind in HistoryKind::ALL {
            assert!(store.history(kind).is_empty());
        }
    }

    #[test]
    fn rehydrate_is_idempotent() {
        let (mut store, medium) = memory_store();
        store.replace_history(HistoryKind::AiAnswer, vec![ChatMessage::user("q")]);

        let mut restarted = HistoryStore::new(Box::new(medium));
        restarted.rehydrate();
        let first: Vec<_> = restarted.history(HistoryKind::AiAnswer).to_vec();
        restarted.rehydrate();
        assert_eq!(restarted.history(HistoryKind::AiAnswer), first.as_slice());
    }

    #[test]
    fn malformed_key_defaults_empty_without_touching_others() {
        let mut medium = MemoryMedium::new();
        medium
            .write("makePromptHistory", "{not json")
            .unwrap();
        medium
            .write("aiTalkHistory", r#"[{"role":"user","text":"kept"}]"#)
            .unwrap();

        let mut store = HistoryStore::new(Box::new(medium));
        store.rehydrate();
        assert!(store.history(HistoryKind::MakePrompt).is_empty());
        assert!(store.history(HistoryKind::AiAnswer).is_empty());
        assert_eq!(
            store.history(HistoryKind::AiTalk),
            &[ChatMessage::user("kept")]
        );
    }

    #[test]
    fn persisted_value_matches_localstorage_layout() {
        // Store starts empty, one replacement, then the medium holds the
        // exact JSON array and a fresh rehydrate reads it back.
        let (mut store, medium) = memory_store();
        store.replace_history(HistoryKind::AiTalk, vec![ChatMessage::user("hi")]);
        assert_eq!(
            medium.read("aiTalkHistory").unwrap().as_deref(),
            Some(r#"[{"role":"user","text":"hi"}]"#)
        );

        let mut restarted = HistoryStore::new(Box::new(medium));
        restarted.rehydrate();
        assert_eq!(
            restarted.history(HistoryKind::AiTalk),
            &[ChatMessage::user("hi")]
        );
    }

    /// Medium whose writes always fail, for the quota-exceeded path.
    struct BrokenMedium;

    impl StorageMedium for BrokenMedium {
        fn read(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::other("medium unavailable"))
        }

        fn write(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::other("quota exceeded"))
        }
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let mut store = HistoryStore::new(Box::new(BrokenMedium));
        store.replace_history(HistoryKind::AiTalk, vec![ChatMessage::user("hi")]);
        assert_eq!(
            store.history(HistoryKind::AiTalk),
            &[ChatMessage::user("hi")]
        );
    }

    #[test]
    fn read_failure_rehydrates_empty() {
        let mut store = HistoryStore::new(Box::new(BrokenMedium));
        store.rehydrate();
        for kind in HistoryKind::ALL {
            assert!(store.history(kind).is_empty());
        }
    }
}
