//! Pipeline entry points.
//!
//! The segmenter is an explicitly constructed, injected resource handle, not
//! ambient global state. `Pipeline` is cheap to share: all transforms are
//! pure and the handle is only ever read (`Segmenter: Send + Sync`).

use crate::reading;
use crate::romaji;
use crate::segment::{SegmentError, Segmenter};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// The phonetic normalization pipeline: raw text → currency normalization →
/// segmentation → hiragana reading → romaji.
pub struct Pipeline<S: Segmenter> {
    segmenter: S,
}

impl<S: Segmenter> Pipeline<S> {
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// The hiragana reading of `text`.
    pub fn to_hiragana(&self, text: &str, spaced: bool) -> Result<String, PipelineError> {
        Ok(reading::compose(&self.segmenter, text, spaced)?)
    }

    /// The romanized reading of `text`. Romanization always runs over the
    /// spaced hiragana form; `spaced` only controls the output joining.
    pub fn to_romaji(&self, text: &str, spaced: bool) -> Result<String, PipelineError> {
        let hiragana = reading::compose(&self.segmenter, text, true)?;
        Ok(romaji::romanize(&hiragana, spaced))
    }
}
