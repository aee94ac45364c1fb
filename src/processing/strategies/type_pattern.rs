use super::{CompiledField, MatchStrategy};
use crate::models::{FieldType, MatchCandidate, Strategy};
use crate::processing::{is_valid_value, Alphabet, TokenizedText};
use crate::utils::{MapperError, Result};
use regex::Regex;

pub const TYPE_PATTERN_BASE_CONFIDENCE: u8 = 50;
pub const TYPE_PATTERN_DATE_BONUS: u8 = 20;
pub const TYPE_PATTERN_OTHER_BONUS: u8 = 10;

/// Value shapes recognised without any label, per field type.
#[derive(Debug, Clone)]
pub struct TypePatterns {
    date: Vec<Regex>,
    number: Vec<Regex>,
    name: Vec<Regex>,
    address: Vec<Regex>,
}

impl TypePatterns {
    pub fn compile(alphabet: &Alphabet) -> Result<Self> {
        let upper = alphabet.upper_class();
        let lower = alphabet.lower_class();
        let letters = alphabet.letter_class();
        let word = format!("[{}][{}]+", upper, lower);

        Ok(TypePatterns {
            date: compile_all(&[
                r"(\d{1,2}[\s.\-/]\d{1,2}[\s.\-/]\d{4})".to_string(),
                // day, month name, year
                format!(r"(\d{{1,2}}\s+[{}]{{3,}}\s+\d{{4}})", letters),
                r"(\d{4}[\s.\-/]\d{1,2}[\s.\-/]\d{1,2})".to_string(),
            ])?,
            number: compile_all(&[
                // PESEL
                r"\b(\d{11})\b".to_string(),
                // passport / ID card series and number
                r"\b([A-Z]{3}\s*\d{6})\b".to_string(),
            ])?,
            name: compile_all(&[format!(r"\b({w}(?:\s+{w})*)\b", w = word)])?,
            address: compile_all(&[format!(
                r"\b({w}(?:\s+\d+)*(?:\s*,\s*\d{{2}}-\d{{3}}\s*{w})*)",
                w = word
            )])?,
        })
    }

    /// Patterns that apply to `field`, in the order they are tried.
    pub fn for_field(&self, field: &CompiledField) -> &[Regex] {
        match field.descriptor.field_type {
            FieldType::Date => self.date.as_slice(),
            FieldType::Number => self.number.as_slice(),
            FieldType::Text if field.descriptor.is_name_field() => self.name.as_slice(),
            FieldType::Address => self.address.as_slice(),
            _ => &[],
        }
    }
}

fn compile_all(sources: &[String]) -> Result<Vec<Regex>> {
    sources
        .iter()
        .map(|source| {
            Regex::new(source).map_err(|e| MapperError::PatternError(format!("type pattern {}: {}", source, e)))
        })
        .collect()
}

/// Strategy B: search the whole text for a value shaped like the field type.
#[derive(Debug, Clone)]
pub struct TypePatternStrategy {
    alphabet: Alphabet,
    patterns: TypePatterns,
}

impl TypePatternStrategy {
    pub fn new(alphabet: Alphabet) -> Result<Self> {
        let patterns = TypePatterns::compile(&alphabet)?;
        Ok(TypePatternStrategy { alphabet, patterns })
    }

    pub fn confidence_for(field_type: FieldType) -> u8 {
        if field_type == FieldType::Date {
            TYPE_PATTERN_BASE_CONFIDENCE + TYPE_PATTERN_DATE_BONUS
        } else {
            TYPE_PATTERN_BASE_CONFIDENCE + TYPE_PATTERN_OTHER_BONUS
        }
    }
}

impl MatchStrategy for TypePatternStrategy {
    fn kind(&self) -> Strategy {
        Strategy::TypePattern
    }

    fn find(&self, doc: &TokenizedText, field: &CompiledField) -> Option<MatchCandidate> {
        let descriptor = &field.descriptor;
        let value = self.patterns.for_field(field).iter().find_map(|pattern| {
            pattern.captures_iter(doc.full).find_map(|captures| {
                let value = captures.get(1)?.as_str().trim();
                is_valid_value(value, descriptor, &self.alphabet).then_some(value)
            })
        })?;

        Some(MatchCandidate::new(
            value,
            Self::confidence_for(descriptor.field_type),
            Strategy::TypePattern,
        ))
    }
}
