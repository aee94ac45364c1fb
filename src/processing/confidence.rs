// Confidence weights for label/value matches. The values are empirical and
// were never fitted against a labelled corpus; change them only together with
// a test set that shows the effect.

use super::Alphabet;
use crate::models::{FieldDescriptor, FieldType};
use lazy_static::lazy_static;
use regex::Regex;

pub const BASE_CONFIDENCE: i32 = 60;
pub const CANONICAL_LABEL_BONUS: i32 = 20;
pub const FORMATTED_DATE_BONUS: i32 = 15;
pub const CAPITALIZED_NAME_BONUS: i32 = 10;
pub const SHORT_VALUE_PENALTY: i32 = 30;
pub const LONG_VALUE_PENALTY: i32 = 20;
pub const SHORT_VALUE_LEN: usize = 2;
pub const LONG_VALUE_LEN: usize = 100;
pub const MAX_CONFIDENCE: u8 = 100;

lazy_static! {
    static ref NUMERIC_DATE: Regex = Regex::new(r"\d{1,2}[\s.\-/]\d{1,2}[\s.\-/]\d{4}").unwrap();
}

/// Score a value found next to `matched_label` on `source_line`.
///
/// `matched_label` is the lowercased label text that matched. The line is
/// accepted for parity with the other scoring inputs but does not currently
/// affect the score.
pub fn calculate_confidence(
    value: &str,
    field: &FieldDescriptor,
    matched_label: &str,
    _source_line: &str,
    alphabet: &Alphabet,
) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if field.is_canonical_label(matched_label) {
        confidence += CANONICAL_LABEL_BONUS;
    }

    if field.field_type == FieldType::Date && NUMERIC_DATE.is_match(value) {
        confidence += FORMATTED_DATE_BONUS;
    }

    if field.is_name_field() && value.chars().next().is_some_and(|c| alphabet.is_upper(c)) {
        confidence += CAPITALIZED_NAME_BONUS;
    }

    let len = value.chars().count();
    if len < SHORT_VALUE_LEN {
        confidence -= SHORT_VALUE_PENALTY;
    }
    if len > LONG_VALUE_LEN {
        confidence -= LONG_VALUE_PENALTY;
    }

    confidence.clamp(0, MAX_CONFIDENCE as i32) as u8
}
