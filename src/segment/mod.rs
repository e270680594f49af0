//! Morphological segmenter interface.
//!
//! The reading pipeline consumes tokens through the [`Segmenter`] trait rather
//! than binding to one analyzer. Production injects a dictionary-backed
//! morphological analyzer; [`SimpleSegmenter`] is a dictionary-free fallback.

mod simple;
#[cfg(test)]
pub(crate) mod testutil;

pub use simple::SimpleSegmenter;

/// Coarse token category, the minimum the composer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Ordinary content word (noun, verb stem, ...).
    Word,
    /// Punctuation or other symbol; the surface is always kept verbatim.
    Symbol,
    /// Grammatical particle/auxiliary attaching to the preceding content word.
    Auxiliary,
    /// Anything the backend could not classify.
    Other,
}

/// One segmenter output unit. Immutable, owned by the pipeline invocation
/// that produced it.
#[derive(Debug, Clone)]
pub struct Token {
    /// Exact source substring.
    pub surface: String,
    pub category: TokenCategory,
    /// Katakana reading; `None` means the backend has no reliable reading.
    pub reading: Option<String>,
}

impl Token {
    pub fn new(
        surface: impl Into<String>,
        category: TokenCategory,
        reading: Option<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            category,
            reading,
        }
    }

    pub fn word(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self::new(surface, TokenCategory::Word, Some(reading.into()))
    }

    pub fn symbol(surface: impl Into<String>) -> Self {
        Self::new(surface, TokenCategory::Symbol, None)
    }

    pub fn auxiliary(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self::new(surface, TokenCategory::Auxiliary, Some(reading.into()))
    }

    /// Whitespace tokens never form chunks; they only mark a boundary.
    pub fn is_whitespace(&self) -> bool {
        self.surface.chars().all(char::is_whitespace)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("segmenter backend error: {0}")]
    Backend(String),
}

/// A pluggable morphological segmenter.
///
/// Contract: the returned tokens are ordered, cover the entire input with no
/// gaps and no overlaps, and expose the exact surface slice of each unit.
///
/// The `Send + Sync` bound encodes the sharing rule: one segmenter instance
/// may serve concurrent reads from multiple in-flight requests. A backend
/// that is not reentrant must be wrapped (one instance per thread, or a pool)
/// before implementing this trait.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError>;
}
