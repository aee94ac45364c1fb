use serde::{Deserialize, Serialize};

/// Letters a document language adds on top of ASCII `A-Z`/`a-z`.
///
/// Every letter-sensitive pattern in the mapper is built from an `Alphabet`,
/// so supporting another language means configuring a new one instead of
/// editing each regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    pub name: String,
    /// Uppercase letters beyond `A-Z`.
    #[serde(default)]
    pub upper: String,
    /// Lowercase letters beyond `a-z`.
    #[serde(default)]
    pub lower: String,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::polish()
    }
}

impl Alphabet {
    pub fn new(name: &str, upper: &str, lower: &str) -> Self {
        Alphabet {
            name: name.to_string(),
            upper: upper.to_string(),
            lower: lower.to_string(),
        }
    }

    pub fn polish() -> Self {
        Self::new("pl", "ĄĆĘŁŃÓŚŹŻ", "ąćęłńóśźż")
    }

    /// Plain ASCII letters only.
    pub fn latin() -> Self {
        Self::new("latin", "", "")
    }

    /// Look up a built-in alphabet by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pl" | "polish" => Some(Self::polish()),
            "latin" | "en" | "english" => Some(Self::latin()),
            _ => None,
        }
    }

    pub fn is_upper(&self, c: char) -> bool {
        c.is_ascii_uppercase() || self.upper.contains(c)
    }

    pub fn is_lower(&self, c: char) -> bool {
        c.is_ascii_lowercase() || self.lower.contains(c)
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.is_upper(c) || self.is_lower(c)
    }

    pub fn is_alphanumeric(&self, c: char) -> bool {
        c.is_ascii_digit() || self.is_letter(c)
    }

    /// Class body (without brackets) matching an uppercase letter.
    pub fn upper_class(&self) -> String {
        format!("A-Z{}", escape_class(&self.upper))
    }

    /// Class body (without brackets) matching a lowercase letter.
    pub fn lower_class(&self) -> String {
        format!("a-z{}", escape_class(&self.lower))
    }

    /// Class body (without brackets) matching any letter.
    pub fn letter_class(&self) -> String {
        format!("{}{}", self.upper_class(), self.lower_class())
    }
}

fn escape_class(letters: &str) -> String {
    letters
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
        .collect()
}
