//! Per-chat display settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which annotation lines a chat wants attached to translated replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub show_hiragana: bool,
    pub show_romaji: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            show_hiragana: true,
            show_romaji: true,
        }
    }
}

/// In-memory settings store keyed by chat id (group, room, or user).
#[derive(Debug, Default)]
pub struct SettingsStore {
    chats: HashMap<String, ChatSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for a chat, defaults for chats never seen before.
    pub fn get(&self, chat_id: &str) -> ChatSettings {
        self.chats.get(chat_id).copied().unwrap_or_default()
    }

    /// Apply an update to one chat's settings and return the result.
    pub fn update(
        &mut self,
        chat_id: &str,
        f: impl FnOnce(&mut ChatSettings),
    ) -> ChatSettings {
        let entry = self.chats.entry(chat_id.to_string()).or_default();
        f(entry);
        *entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on() {
        let store = SettingsStore::new();
        let s = store.get("chat-1");
        assert!(s.show_hiragana);
        assert!(s.show_romaji);
    }

    #[test]
    fn test_update_is_per_chat() {
        let mut store = SettingsStore::new();
        store.update("chat-1", |s| s.show_hiragana = false);
        assert!(!store.get("chat-1").show_hiragana);
        assert!(store.get("chat-1").show_romaji);
        assert!(store.get("chat-2").show_hiragana);
    }

    #[test]
    fn test_update_returns_new_state() {
        let mut store = SettingsStore::new();
        let s = store.update("c", |s| s.show_romaji = false);
        assert!(!s.show_romaji);
    }
}
