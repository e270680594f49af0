//! Dictionary-free fallback segmenter.

use crate::unicode;

use super::{SegmentError, Segmenter, Token, TokenCategory};

/// Groups the input into maximal runs of the same character class.
///
/// Kana runs get a reading derived from the offset map (hiragana runs read as
/// their katakana form, katakana runs as themselves); kanji and ASCII runs
/// carry no reading, so the composer keeps their surface verbatim. Auxiliary
/// tagging needs a dictionary, so this backend never emits it.
///
/// Suitable for tests and for degraded operation when no morphological
/// analyzer is available; readings for kanji text require a real backend.
#[derive(Debug, Default)]
pub struct SimpleSegmenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Ascii,
    Hiragana,
    Katakana,
    Kanji,
    Symbol,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_ascii_alphanumeric() {
        CharClass::Ascii
    } else if unicode::is_hiragana(c) {
        CharClass::Hiragana
    } else if unicode::is_katakana(c) || unicode::is_prolonged_mark(c) {
        CharClass::Katakana
    } else if unicode::is_kanji(c) {
        CharClass::Kanji
    } else {
        CharClass::Symbol
    }
}

fn run_to_token(run: &str, class: CharClass) -> Token {
    match class {
        CharClass::Hiragana => Token::word(run, unicode::hiragana_to_katakana(run)),
        CharClass::Katakana => Token::word(run, run),
        CharClass::Whitespace | CharClass::Symbol => Token::symbol(run),
        // No dictionary, no reading: surface passes through verbatim.
        CharClass::Ascii | CharClass::Kanji => Token::new(run, TokenCategory::Word, None),
    }
}

impl Segmenter for SimpleSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        let mut tokens = Vec::new();
        let mut run_start = 0;
        let mut run_class = None;

        for (idx, c) in text.char_indices() {
            let class = classify(c);
            match run_class {
                Some(current) if current == class => {}
                Some(current) => {
                    tokens.push(run_to_token(&text[run_start..idx], current));
                    run_start = idx;
                    run_class = Some(class);
                }
                None => run_class = Some(class),
            }
        }
        if let Some(class) = run_class {
            tokens.push(run_to_token(&text[run_start..], class));
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.surface.as_str()).collect()
    }

    #[test]
    fn test_empty() {
        let tokens = SimpleSegmenter.segment("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_class_runs() {
        let tokens = SimpleSegmenter.segment("これは ABC123 です!!").unwrap();
        assert_eq!(
            surfaces(&tokens),
            vec!["これは", " ", "ABC123", " ", "です", "!!"]
        );
    }

    #[test]
    fn test_coverage_no_gaps() {
        let input = "今日は晴れ、¥100です (^^)";
        let tokens = SimpleSegmenter.segment(input).unwrap();
        let joined: String = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_hiragana_reading() {
        let tokens = SimpleSegmenter.segment("こんにちは").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].reading.as_deref(), Some("コンニチハ"));
        assert_eq!(tokens[0].category, TokenCategory::Word);
    }

    #[test]
    fn test_katakana_reading_includes_prolonged_mark() {
        let tokens = SimpleSegmenter.segment("ラーメン").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].reading.as_deref(), Some("ラーメン"));
    }

    #[test]
    fn test_kanji_has_no_reading() {
        let tokens = SimpleSegmenter.segment("漢字").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].reading, None);
    }

    #[test]
    fn test_symbols_and_whitespace() {
        let tokens = SimpleSegmenter.segment("!! (^^)").unwrap();
        assert_eq!(surfaces(&tokens), vec!["!!", " ", "(^^)"]);
        assert!(tokens[1].is_whitespace());
        assert_eq!(tokens[0].category, TokenCategory::Symbol);
    }
}
