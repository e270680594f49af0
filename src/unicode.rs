//! Character-level Unicode classification and kana conversion for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in segmenter output or
/// dictionary readings, so the simpler block-level check is preferred over an
/// exact range for clarity.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// The long-vowel mark ー (U+30FC), valid inside both hiragana and katakana
/// readings ("らーめん").
pub fn is_prolonged_mark(c: char) -> bool {
    c == 'ー'
}

/// Terminal punctuation that absorbs the space preceding it in spaced output.
pub const TERMINAL_PUNCTUATION: &[char] = &['、', '。', '！', '？', '!', '?'];

pub fn is_terminal_punctuation(c: char) -> bool {
    TERMINAL_PUNCTUATION.contains(&c)
}

/// Convert a katakana string to hiragana.
///
/// Only the offset-mapped range ァ (U+30A1) ..= ヶ (U+30F6) is shifted down by
/// 0x60; everything else (ー, ASCII, symbols) passes through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('ァ'..='ヶ').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a hiragana string to katakana (the inverse offset map).
/// Non-hiragana characters are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('ぁ'..='ゖ').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is one or more ASCII letters/digits (product codes,
/// English words, plain numbers). Such surfaces are never substituted.
pub fn is_ascii_alphanumeric_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}
