//! Chat-bot message handling: command dispatch, translation, annotation.
//!
//! This is the seam a transport (webhook handler) calls into with the already
//! verified message text and chat id. Transport concerns — HTTP, signature
//! verification, reply delivery — stay outside the crate.

pub mod command;
pub mod langid;
pub mod reply;
pub mod settings;

pub use command::Command;
pub use langid::Lang;
pub use settings::{ChatSettings, SettingsStore};

use crate::pipeline::Pipeline;
use crate::segment::Segmenter;
use crate::translate::{TargetLang, TranslateError, Translator};

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Handle one incoming text message and return the reply text.
///
/// Commands are handled locally. Everything else is translated toward the
/// opposite language and, for the VI→JA direction, annotated with phonetic
/// readings per the chat's settings. Translation failures propagate;
/// annotation failures degrade to an unannotated reply.
pub fn handle_message<S: Segmenter>(
    store: &mut SettingsStore,
    translator: &dyn Translator,
    pipeline: &Pipeline<S>,
    chat_id: &str,
    text: &str,
) -> Result<String, BotError> {
    if let Some(cmd) = command::parse(text) {
        return Ok(apply_command(store, chat_id, cmd));
    }

    let text = reply::strip_direction_tag(text);
    let source = langid::guess(text);
    let target = match source {
        Lang::Vietnamese => TargetLang::Japanese,
        Lang::Japanese => TargetLang::Vietnamese,
    };
    let translated = translator.translate(text, target)?;
    Ok(reply::build_reply(
        pipeline,
        store.get(chat_id),
        source,
        &translated,
    ))
}

/// Command confirmations are in Vietnamese, the language of the users who
/// configure the bot.
fn apply_command(store: &mut SettingsStore, chat_id: &str, cmd: Command) -> String {
    fn toggled(on: bool) -> &'static str {
        if on {
            "bật"
        } else {
            "tắt"
        }
    }
    match cmd {
        Command::Hiragana(on) => {
            store.update(chat_id, |s| s.show_hiragana = on);
            format!("Đã {} hiển thị Hiragana.", toggled(on))
        }
        Command::Romaji(on) => {
            store.update(chat_id, |s| s.show_romaji = on);
            format!("Đã {} hiển thị Romaji.", toggled(on))
        }
        Command::Status => {
            let s = store.get(chat_id);
            format!(
                "Cài đặt hiện tại\n- Hiragana: {}\n- Romaji: {}",
                if s.show_hiragana { "ON" } else { "OFF" },
                if s.show_romaji { "ON" } else { "OFF" },
            )
        }
    }
}
