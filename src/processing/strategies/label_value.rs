use super::{CompiledField, MatchStrategy};
use crate::models::{MatchCandidate, Strategy};
use crate::processing::{calculate_confidence, is_valid_value, Alphabet, TokenizedText};
use crate::utils::{MapperError, Result};
use log::trace;
use regex::Regex;

/// The three label/value shapes tried for one label, in order:
/// `Label: value`, `Label Value` (value must start with a capital) and
/// `Label - value`.
#[derive(Debug, Clone)]
pub struct LabelPatterns {
    pub label: String,
    patterns: [Regex; 3],
}

impl LabelPatterns {
    pub fn compile(code: &str, label: &str, alphabet: &Alphabet) -> Result<Self> {
        let escaped = regex::escape(label);
        let sources = [
            format!(r"(?i:{})\s*:+\s*(.+)", escaped),
            format!(
                r"(?i:{})\s+([{}][{}\s\-.]+)",
                escaped,
                alphabet.upper_class(),
                alphabet.letter_class()
            ),
            format!(r"(?i:{})\s*[\-–]\s*(.+)", escaped),
        ];

        let compile = |source: &String| {
            Regex::new(source).map_err(|e| {
                MapperError::PatternError(format!("label {:?} of field {}: {}", label, code, e))
            })
        };

        Ok(LabelPatterns {
            label: label.to_string(),
            patterns: [compile(&sources[0])?, compile(&sources[1])?, compile(&sources[2])?],
        })
    }

    /// First capture across the three shapes that yields an acceptable value.
    fn capture<'l>(&self, line: &'l str, accept: impl Fn(&str) -> bool) -> Option<&'l str> {
        self.patterns.iter().find_map(|pattern| {
            let value = pattern.captures(line)?.get(1)?.as_str().trim();
            (value.chars().count() > 1 && accept(value)).then_some(value)
        })
    }
}

/// Strategy A: a known label on a line, followed by its value.
#[derive(Debug, Clone)]
pub struct LabelValueStrategy {
    alphabet: Alphabet,
}

impl LabelValueStrategy {
    pub fn new(alphabet: Alphabet) -> Self {
        LabelValueStrategy { alphabet }
    }

    /// Match a single line against every label of the field; the first label
    /// that yields a valid value decides the line's candidate.
    pub fn match_line(&self, line: &str, field: &CompiledField) -> Option<MatchCandidate> {
        let descriptor = &field.descriptor;
        field.label_patterns.iter().find_map(|patterns| {
            let value = patterns.capture(line, |value| is_valid_value(value, descriptor, &self.alphabet))?;
            let confidence = calculate_confidence(value, descriptor, &patterns.label, line, &self.alphabet);
            Some(MatchCandidate::new(value, confidence, Strategy::LabelValue))
        })
    }
}

impl MatchStrategy for LabelValueStrategy {
    fn kind(&self) -> Strategy {
        Strategy::LabelValue
    }

    fn find(&self, doc: &TokenizedText, field: &CompiledField) -> Option<MatchCandidate> {
        let mut best: Option<MatchCandidate> = None;
        for line in &doc.lines {
            if let Some(candidate) = self.match_line(line, field) {
                trace!("{}: {:?} scored {} on line {:?}", field.code(), candidate.value, candidate.confidence, line);
                if best.as_ref().map_or(true, |b| candidate.confidence > b.confidence) {
                    best = Some(candidate);
                }
            }
        }
        best
    }
}
