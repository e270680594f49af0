//! Hiragana-to-Latin romanization.
//!
//! Character-granular by design: only hiragana code points (plus the
//! long-vowel mark ー) are substituted from the mapping table, everything else
//! copies through unchanged. Token-level romanization would let symbol or
//! mixed-script chunks leak through mis-romanized; per-character gating makes
//! every output character traceable to one rule.

mod config;
mod table;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_kana_toml, TableError};
pub use table::DEFAULT_TOML;

use crate::unicode;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// The fixed hiragana→Latin mapping, built once per process.
pub struct RomajiTable {
    map: BTreeMap<String, String>,
}

impl RomajiTable {
    /// Set custom TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_kana_toml(toml_str).expect("romaji table TOML must be valid");
            RomajiTable { map }
        })
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }
}

/// Romanize a spaced hiragana string (the spaced output of the Reading
/// Composer). Parts are romanized independently and rejoined by single
/// spaces, or concatenated in compact mode.
pub fn romanize(hiragana_spaced: &str, spaced: bool) -> String {
    let parts: Vec<String> = hiragana_spaced
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(romanize_reading)
        .collect();
    if spaced {
        parts.join(" ")
    } else {
        parts.concat()
    }
}

/// Romanize one reading, character by character.
///
/// Greedy two-character lookup picks up yōon digraphs (きゃ) before single
/// kana; the sokuon っ doubles the first consonant of the following mora.
/// Non-hiragana characters are copied byte-identical.
pub fn romanize_reading(reading: &str) -> String {
    let table = RomajiTable::global();
    let chars: Vec<char> = reading.chars().collect();
    let mut out = String::with_capacity(reading.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !unicode::is_hiragana(c) && !unicode::is_prolonged_mark(c) {
            out.push(c);
            i += 1;
            continue;
        }
        if c == 'っ' && i + 1 < chars.len() {
            if let Some((romaji, _)) = lookup_mora(table, &chars[i + 1..]) {
                if let Some(first) = romaji.chars().next() {
                    if first.is_ascii_alphabetic() && !is_vowel(first) {
                        out.push(first);
                        i += 1;
                        continue;
                    }
                }
            }
        }
        match lookup_mora(table, &chars[i..]) {
            Some((romaji, consumed)) => {
                out.push_str(romaji);
                i += consumed;
            }
            None => {
                // Hiragana with no table entry (iteration marks etc.)
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn lookup_mora<'a>(table: &'a RomajiTable, chars: &[char]) -> Option<(&'a str, usize)> {
    if chars.len() >= 2 {
        let key: String = chars[..2].iter().collect();
        if let Some(value) = table.lookup(&key) {
            return Some((value, 2));
        }
    }
    let key = chars[0].to_string();
    table.lookup(&key).map(|value| (value, 1))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}
