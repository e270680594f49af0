//! Reading Composer: token stream → hiragana reading.
//!
//! Currency amounts are normalized first, the text is segmented, and tokens
//! are folded into chunks (a content token plus any trailing auxiliary
//! continuations). Symbols, ASCII alphanumeric runs, and tokens without a
//! reliable reading keep their surface verbatim.

use tracing::debug_span;

use crate::numeric::normalize_currency;
use crate::segment::{SegmentError, Segmenter, Token, TokenCategory};
use crate::unicode;

/// Compose the hiragana reading of `text`.
///
/// In spaced mode chunks are joined by single spaces, whitespace runs are
/// collapsed to one space, and the space before terminal punctuation
/// (、。！？!?) is dropped. Compact mode concatenates chunks directly.
pub fn compose(
    segmenter: &dyn Segmenter,
    text: &str,
    spaced: bool,
) -> Result<String, SegmentError> {
    let _span = debug_span!("compose", spaced).entered();
    let normalized = normalize_currency(text);
    let tokens = segmenter.segment(&normalized)?;
    let chunks = build_chunks(&tokens);
    if spaced {
        Ok(finish_spacing(&chunks.join(" ")))
    } else {
        Ok(chunks.concat())
    }
}

/// Fold tokens into chunks.
///
/// A two-state automaton: an auxiliary token extends the open chunk, any
/// other token starts a new one. Pure-whitespace tokens are dropped entirely
/// (their boundary is reintroduced at emit time) and do not interrupt an
/// auxiliary continuation. A leading auxiliary with no open chunk starts its
/// own.
fn build_chunks(tokens: &[Token]) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    for token in tokens {
        if token.is_whitespace() {
            continue;
        }
        let piece = token_reading(token);
        if token.category == TokenCategory::Auxiliary {
            if let Some(open) = chunks.last_mut() {
                open.push_str(&piece);
                continue;
            }
        }
        chunks.push(piece);
    }
    chunks
}

/// The contribution of one token, in order of precedence: symbols verbatim,
/// ASCII alphanumeric surfaces verbatim regardless of category, unknown
/// readings verbatim, otherwise the katakana reading shifted to hiragana.
fn token_reading(token: &Token) -> String {
    if token.category == TokenCategory::Symbol
        || unicode::is_ascii_alphanumeric_run(&token.surface)
    {
        return token.surface.clone();
    }
    match &token.reading {
        Some(reading) => unicode::katakana_to_hiragana(reading),
        None => token.surface.clone(),
    }
}

/// Collapse whitespace runs to a single space and remove the space preceding
/// a terminal punctuation mark. Leading and trailing whitespace is dropped.
pub(crate) fn finish_spacing(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if !out.is_empty() && !unicode::is_terminal_punctuation(c) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out
}
