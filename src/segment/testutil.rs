//! Scripted segmenter fixture for composer tests.

use super::{SegmentError, Segmenter, Token};

/// Returns a fixed token sequence regardless of input, so tests can exercise
/// category/reading combinations a real backend may not produce on demand.
pub(crate) struct ScriptedSegmenter {
    tokens: Vec<Token>,
}

impl ScriptedSegmenter {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl Segmenter for ScriptedSegmenter {
    fn segment(&self, _text: &str) -> Result<Vec<Token>, SegmentError> {
        Ok(self.tokens.clone())
    }
}

/// Always fails, for error-propagation tests.
pub(crate) struct FailingSegmenter;

impl Segmenter for FailingSegmenter {
    fn segment(&self, _text: &str) -> Result<Vec<Token>, SegmentError> {
        Err(SegmentError::Backend("dictionary unavailable".to_string()))
    }
}
