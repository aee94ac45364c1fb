use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_SEPARATORS: Regex = Regex::new(r"[\s.,:;\-()\[\]/\\]+").unwrap();
}

/// Raw OCR text split the ways the matching strategies consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText<'a> {
    pub full: &'a str,
    /// Non-empty, trimmed lines in document order.
    pub lines: Vec<&'a str>,
}

impl<'a> TokenizedText<'a> {
    pub fn new(text: &'a str) -> Self {
        TokenizedText {
            full: text,
            lines: split_lines(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lowercase word tokens of the whole text. None of the strategies need
    /// them, so they are only built on request.
    pub fn tokens(&self) -> Vec<String> {
        tokenize(self.full)
    }
}

pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_SEPARATORS
        .split(&lower)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
