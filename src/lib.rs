//! yomigana — phonetic annotation pipeline for a Japanese↔Vietnamese chat bot.
//!
//! The core is a four-stage, strictly linear pipeline over post-translation
//! Japanese text: currency amounts are spelled out as kanji numeral words,
//! the text is segmented through an injected morphological backend, tokens
//! are composed into a hiragana reading, and the reading is romanized
//! character by character. Embedded symbols, digits, Latin runs, and
//! whitespace pass through untouched.
//!
//! The `bot` module supplies the surrounding chat logic (commands, per-chat
//! settings, language guessing, reply assembly); transports and the MT
//! service plug in behind the `Segmenter` and `Translator` traits.

pub mod bot;
pub mod numeric;
pub mod pipeline;
pub mod reading;
pub mod romaji;
pub mod segment;
pub mod translate;
pub mod unicode;

pub use pipeline::{Pipeline, PipelineError};
pub use segment::{SegmentError, Segmenter, SimpleSegmenter, Token, TokenCategory};
