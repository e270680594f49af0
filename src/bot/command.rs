//! Chat command grammar: `/status`, `/hira on|off`, `/romaji on|off`.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report current per-chat display settings.
    Status,
    /// Toggle the hiragana annotation line.
    Hiragana(bool),
    /// Toggle the romaji annotation line.
    Romaji(bool),
}

fn hira_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/(?:hira|h)\s+(on|off)$").expect("command pattern"))
}

fn romaji_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/(?:romaji|r)\s+(on|off)$").expect("command pattern"))
}

/// Parse a message as a command. Matching is case-insensitive over the
/// trimmed text; anything that is not a command returns `None` and is treated
/// as translatable text.
pub fn parse(text: &str) -> Option<Command> {
    let t = text.trim().to_lowercase();
    if t == "/status" {
        return Some(Command::Status);
    }
    if let Some(caps) = hira_re().captures(&t) {
        return Some(Command::Hiragana(&caps[1] == "on"));
    }
    if let Some(caps) = romaji_re().captures(&t) {
        return Some(Command::Romaji(&caps[1] == "on"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(parse("/status"), Some(Command::Status));
        assert_eq!(parse("  /STATUS  "), Some(Command::Status));
    }

    #[test]
    fn test_hiragana_toggle() {
        assert_eq!(parse("/hira on"), Some(Command::Hiragana(true)));
        assert_eq!(parse("/h off"), Some(Command::Hiragana(false)));
        assert_eq!(parse("/HIRA ON"), Some(Command::Hiragana(true)));
    }

    #[test]
    fn test_romaji_toggle() {
        assert_eq!(parse("/romaji off"), Some(Command::Romaji(false)));
        assert_eq!(parse("/r on"), Some(Command::Romaji(true)));
    }

    #[test]
    fn test_not_a_command() {
        assert_eq!(parse("こんにちは"), None);
        assert_eq!(parse("/hira"), None);
        assert_eq!(parse("/hira maybe"), None);
        assert_eq!(parse("status"), None);
        assert_eq!(parse(""), None);
    }
}
