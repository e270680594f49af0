//! Source-language guess via a single character-set heuristic.

/// Guessed source language of an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Japanese,
    Vietnamese,
}

/// Characters that only occur in Vietnamese orthography (diacritic letters
/// and đ). One hit anywhere in the text decides Vietnamese.
const VIETNAMESE_CHARS: &str = "ăâđêôơưÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬĐÈÉẺẼẸÊỀẾỂỄỆ\
ÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢ\
ÙÚỦŨỤƯỪỨỬỮỰ\
ỲÝỶỸỴàáảãạăằắẳẵặâầấẩẫậđ\
èéẻẽẹêềếểễệ\
ìíỉĩị\
òóỏõọôồốổỗộơờớởỡợ\
ùúủũụưừứửữự\
ỳýỷỹỵ";

/// Everything without a Vietnamese diacritic is treated as Japanese; the bot
/// only ever sees these two languages.
pub fn guess(text: &str) -> Lang {
    if text.chars().any(|c| VIETNAMESE_CHARS.contains(c)) {
        Lang::Vietnamese
    } else {
        Lang::Japanese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese() {
        assert_eq!(guess("Xin chào"), Lang::Vietnamese);
        assert_eq!(guess("cảm ơn bạn"), Lang::Vietnamese);
        assert_eq!(guess("giá 10.000đ"), Lang::Vietnamese);
    }

    #[test]
    fn test_japanese() {
        assert_eq!(guess("こんにちは"), Lang::Japanese);
        assert_eq!(guess("今日は晴れ"), Lang::Japanese);
        // Plain ASCII defaults to Japanese as well
        assert_eq!(guess("hello"), Lang::Japanese);
        assert_eq!(guess(""), Lang::Japanese);
    }
}
