//! Currency-amount normalization into Japanese numeral words.
//!
//! Rewrites yen and dong amounts (¥12,345 / 1000円 / VND 10.000 / 5000₫) into
//! `<kanji numeral><currency word>` form so the downstream reading pipeline
//! pronounces them instead of spelling digits. Supports values up to 兆 (10^12
//! scale groups, i.e. < 10^16).

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::{debug, debug_span};

const YEN_WORD: &str = "円";
const DONG_WORD: &str = "ドン";

const DIGIT_KANJI: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Myriad-scale unit per base-10000 group, least-significant first.
const GROUP_UNITS: [&str; 4] = ["", "万", "億", "兆"];

/// The six currency patterns in fixed priority order. Each pass runs over the
/// whole text, left to right, non-overlapping.
///
/// Substituted regions can never be re-matched by a later pass: the emitted
/// kanji digits are disjoint from the ASCII digit alphabet of every pattern.
fn currency_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Digit run: comma-grouped in threes, dot-grouped for VND/dong, or unbroken.
        const YEN_RUN: &str = r"(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)";
        const VND_RUN: &str = r"(?:[0-9]{1,3}(?:[.,][0-9]{3})+|[0-9]+)";
        let defs: [(String, &str); 6] = [
            (format!(r"[¥￥]\s?({YEN_RUN})"), YEN_WORD),
            (format!(r"({YEN_RUN})円"), YEN_WORD),
            (format!(r"(?i:VND)\s*({VND_RUN})"), DONG_WORD),
            (format!(r"({VND_RUN})\s*(?i:VND)"), DONG_WORD),
            (format!(r"[₫đ]\s*({VND_RUN})"), DONG_WORD),
            (format!(r"({VND_RUN})\s*[₫đ]"), DONG_WORD),
        ];
        defs.into_iter()
            .map(|(pattern, word)| {
                let re = Regex::new(&pattern).expect("currency pattern must be valid");
                (re, word)
            })
            .collect()
    })
}

/// Replace every recognized currency amount with its kanji-numeral spelling.
///
/// A digit run that cannot be converted (overflow, magnitude beyond 兆) is a
/// local data error: that match is left untouched and the scan continues.
pub fn normalize_currency(text: &str) -> String {
    let _span = debug_span!("normalize_currency").entered();
    let mut out = text.to_string();
    for (re, word) in currency_patterns() {
        if !re.is_match(&out) {
            continue;
        }
        out = re
            .replace_all(&out, |caps: &Captures| {
                match parse_digit_run(&caps[1]).and_then(to_kanji_numeral) {
                    Some(kanji) => format!("{kanji}{word}"),
                    None => caps[0].to_string(),
                }
            })
            .into_owned();
    }
    if out != text {
        debug!(original = text, normalized = %out, "currency amounts rewritten");
    }
    out
}

/// Strip grouping separators and parse as a non-negative integer.
fn parse_digit_run(run: &str) -> Option<u64> {
    let digits: String = run.chars().filter(|c| *c != ',' && *c != '.').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Render a number as a kanji numeral word.
///
/// Returns `None` for values at or beyond 10^16 — the 兆 group is the largest
/// supported scale, larger magnitudes are an explicit unsupported range.
pub fn to_kanji_numeral(n: u64) -> Option<String> {
    if n == 0 {
        return Some(DIGIT_KANJI[0].to_string());
    }
    if n >= 10_000_000_000_000_000 {
        return None;
    }

    // Base-10000 groups, least-significant first.
    let mut groups: Vec<(u64, &str)> = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        groups.push((rest % 10_000, GROUP_UNITS[scale]));
        rest /= 10_000;
        scale += 1;
    }

    let mut out = String::new();
    for (value, unit) in groups.iter().rev() {
        // Zero groups contribute nothing, not even their unit.
        if *value == 0 {
            continue;
        }
        render_group(*value, &mut out);
        out.push_str(unit);
    }
    Some(out)
}

/// Render a group value (1..=9999) into `out`.
///
/// The digit kanji for 1 is elided before a place unit (十 not 一十), standard
/// Japanese usage.
fn render_group(value: u64, out: &mut String) {
    let thousands = value / 1000;
    let hundreds = value / 100 % 10;
    let tens = value / 10 % 10;
    let ones = value % 10;

    for (digit, unit) in [(thousands, '千'), (hundreds, '百'), (tens, '十')] {
        if digit == 0 {
            continue;
        }
        if digit != 1 {
            out.push(DIGIT_KANJI[digit as usize]);
        }
        out.push(unit);
    }
    if ones > 0 {
        out.push(DIGIT_KANJI[ones as usize]);
    }
}
