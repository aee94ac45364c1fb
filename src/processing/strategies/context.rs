use super::{CompiledField, MatchStrategy};
use crate::models::{MatchCandidate, Strategy};
use crate::processing::{is_valid_value, Alphabet, TokenizedText};

pub const SAME_LINE_CONFIDENCE: u8 = 40;
pub const NEXT_LINE_CONFIDENCE: u8 = 35;

/// Strategy C: a label mentioned anywhere on a line, with the value either
/// after a separator on the same line or on the line below.
#[derive(Debug, Clone)]
pub struct ContextStrategy {
    alphabet: Alphabet,
}

impl ContextStrategy {
    pub fn new(alphabet: Alphabet) -> Self {
        ContextStrategy { alphabet }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ':' | '–' | '-')
}

impl MatchStrategy for ContextStrategy {
    fn kind(&self) -> Strategy {
        Strategy::Context
    }

    fn find(&self, doc: &TokenizedText, field: &CompiledField) -> Option<MatchCandidate> {
        let descriptor = &field.descriptor;
        let valid = |value: &str| is_valid_value(value, descriptor, &self.alphabet);

        for (i, line) in doc.lines.iter().enumerate() {
            let lower = line.to_lowercase();

            for label in field.labels.iter().filter(|label| lower.contains(label.as_str())) {
                // second separator-delimited segment, not everything after the first separator
                if let Some(segment) = line.split(is_separator).nth(1) {
                    let value = segment.trim();
                    if valid(value) {
                        return Some(MatchCandidate::new(value, SAME_LINE_CONFIDENCE, Strategy::Context));
                    }
                }

                if let Some(&next) = doc.lines.get(i + 1) {
                    if valid(next) {
                        return Some(MatchCandidate::new(next, NEXT_LINE_CONFIDENCE, Strategy::Context));
                    }
                }

                log::trace!("{}: label {:?} present but no usable value near it", field.code(), label);
            }
        }

        None
    }
}
