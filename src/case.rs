//! Text-case helpers applied to resolved messages.

use once_cell::sync::Lazy;
use regex::{ Captures, Regex };

static WORD_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|\s)(\S)").expect("word start pattern is valid")
});

fn upper_word_start(caps: &Captures) -> String {
    format!("{}{}", &caps[1], caps[2].to_uppercase())
}

/// Uppercases the first non-whitespace character.
pub fn capital(text: &str) -> String {
    WORD_START_RE.replace(text, upper_word_start).into_owned()
}

/// Uppercases the first character of every whitespace-separated word.
pub fn title(text: &str) -> String {
    WORD_START_RE.replace_all(text, upper_word_start).into_owned()
}

pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// A case transform, as exposed by the bound resolver shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCase {
    Capital,
    Title,
    Upper,
    Lower,
}

impl TextCase {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCase::Capital => capital(text),
            TextCase::Title => title(text),
            TextCase::Upper => upper(text),
            TextCase::Lower => lower(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_touches_only_the_first_word() {
        assert_eq!(capital("hello world"), "Hello world");
        assert_eq!(capital("  hello"), "  Hello");
        assert_eq!(capital("élan vital"), "Élan vital");
        assert_eq!(capital(""), "");
    }

    #[test]
    fn title_capitalizes_every_word() {
        assert_eq!(title("the quick  brown fox"), "The Quick  Brown Fox");
        assert_eq!(title("already Title"), "Already Title");
    }

    #[test]
    fn title_keeps_the_rest_of_each_word() {
        assert_eq!(title("mIxEd cAsE"), "MIxEd CAsE");
    }

    #[test]
    fn upper_and_lower() {
        assert_eq!(upper("Straße"), "STRASSE");
        assert_eq!(lower("HeLLo"), "hello");
    }

    #[test]
    fn text_case_dispatch() {
        assert_eq!(TextCase::Capital.apply("go"), "Go");
        assert_eq!(TextCase::Title.apply("go on"), "Go On");
        assert_eq!(TextCase::Upper.apply("go"), "GO");
        assert_eq!(TextCase::Lower.apply("GO"), "go");
    }
}
