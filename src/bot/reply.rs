//! Reply assembly: direction tags, annotation lines, length cap.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::bot::langid::Lang;
use crate::bot::settings::ChatSettings;
use crate::pipeline::Pipeline;
use crate::segment::Segmenter;

/// Transport message limit, minus headroom for multi-byte expansion.
pub const MAX_REPLY_CHARS: usize = 4900;

fn tag_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\[\s*(?:JP|VN|JA|VI)\s*[-→]\s*(?:JP|VN|JA|VI)\s*\]\s*")
            .expect("tag prefix pattern")
    })
}

/// Drop one leading direction tag ("[JP→VN] ...", also ASCII hyphen) that
/// users sometimes type back when quoting the bot.
pub fn strip_direction_tag(text: &str) -> &str {
    match tag_prefix_re().find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Assemble the outgoing reply for a translated message.
///
/// VI→JA replies carry `(hiragana)` / `(romaji)` annotation lines when the
/// chat has them enabled; JP→VN replies are never annotated. A pipeline
/// failure drops the affected annotation line and the reply still goes out.
pub fn build_reply<S: Segmenter>(
    pipeline: &Pipeline<S>,
    settings: ChatSettings,
    source: Lang,
    translated: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    match source {
        Lang::Vietnamese => {
            lines.push("[VN→JP]".to_string());
            lines.push(translated.to_string());
            if settings.show_hiragana {
                match pipeline.to_hiragana(translated, true) {
                    Ok(reading) => lines.push(format!("(hiragana) {reading}")),
                    Err(e) => warn!(error = %e, "hiragana annotation skipped"),
                }
            }
            if settings.show_romaji {
                match pipeline.to_romaji(translated, true) {
                    Ok(reading) => lines.push(format!("(romaji) {reading}")),
                    Err(e) => warn!(error = %e, "romaji annotation skipped"),
                }
            }
        }
        Lang::Japanese => {
            lines.push("[JP→VN]".to_string());
            lines.push(translated.to_string());
        }
    }
    truncate_reply(&lines.join("\n"))
}

/// Cap the reply at [`MAX_REPLY_CHARS`] characters.
pub fn truncate_reply(text: &str) -> String {
    if text.chars().count() <= MAX_REPLY_CHARS {
        text.to_string()
    } else {
        text.chars().take(MAX_REPLY_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SimpleSegmenter;

    fn pipeline() -> Pipeline<SimpleSegmenter> {
        Pipeline::new(SimpleSegmenter)
    }

    #[test]
    fn test_strip_direction_tag() {
        assert_eq!(strip_direction_tag("[JP→VN] こんにちは"), "こんにちは");
        assert_eq!(strip_direction_tag("[ vn - jp ]xin chào"), "xin chào");
        assert_eq!(strip_direction_tag("こんにちは"), "こんにちは");
        // Only a leading tag is stripped, and only one
        assert_eq!(
            strip_direction_tag("[JP→VN] [VN→JP] x"),
            "[VN→JP] x"
        );
        assert_eq!(strip_direction_tag("text [JP→VN]"), "text [JP→VN]");
    }

    #[test]
    fn test_vi_to_ja_reply_annotated() {
        let reply = build_reply(
            &pipeline(),
            ChatSettings::default(),
            Lang::Vietnamese,
            "こんにちは",
        );
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[0], "[VN→JP]");
        assert_eq!(lines[1], "こんにちは");
        assert_eq!(lines[2], "(hiragana) こんにちは");
        assert_eq!(lines[3], "(romaji) konnichiha");
    }

    #[test]
    fn test_annotations_respect_settings() {
        let settings = ChatSettings {
            show_hiragana: false,
            show_romaji: true,
        };
        let reply = build_reply(&pipeline(), settings, Lang::Vietnamese, "はい");
        assert!(!reply.contains("(hiragana)"));
        assert!(reply.contains("(romaji) hai"));
    }

    #[test]
    fn test_ja_to_vn_reply_not_annotated() {
        let reply = build_reply(
            &pipeline(),
            ChatSettings::default(),
            Lang::Japanese,
            "Xin chào",
        );
        assert_eq!(reply, "[JP→VN]\nXin chào");
    }

    #[test]
    fn test_truncate_reply() {
        let long = "あ".repeat(MAX_REPLY_CHARS + 50);
        let capped = truncate_reply(&long);
        assert_eq!(capped.chars().count(), MAX_REPLY_CHARS);
        assert_eq!(truncate_reply("short"), "short");
    }
}
