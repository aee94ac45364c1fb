use super::Alphabet;
use crate::models::{FieldDescriptor, FieldType};

const MIN_DATE_LEN: usize = 4;
const MIN_TEXT_LEN: usize = 2;
const MIN_ADDRESS_LEN: usize = 3;

/// Decide whether `value` can stand as a value of `field` at all. Runs before
/// any scoring, so rejected candidates never reach the result set.
pub fn is_valid_value(value: &str, field: &FieldDescriptor, alphabet: &Alphabet) -> bool {
    if value.is_empty() {
        return false;
    }

    // OCR noise such as "‚‚‚‚" or "???###"
    if !value.chars().any(|c| alphabet.is_alphanumeric(c)) {
        return false;
    }

    let len = value.chars().count();
    let has_digit = || value.chars().any(|c| c.is_ascii_digit());
    let has_letter = || value.chars().any(|c| alphabet.is_letter(c));

    match field.field_type {
        FieldType::Date => has_digit() && len >= MIN_DATE_LEN,
        FieldType::Number => has_digit(),
        FieldType::Text => has_letter() && len >= MIN_TEXT_LEN,
        FieldType::Address => has_letter() && len >= MIN_ADDRESS_LEN,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(field_type: FieldType) -> FieldDescriptor {
        FieldDescriptor {
            code: "T-1".to_string(),
            pl_label: "Pole".to_string(),
            en_label: "Field".to_string(),
            field_type,
            required: false,
            category: None,
            aliases: Vec::new(),
        }
    }

    #[test]
    fn test_rejects_noise() {
        let alphabet = Alphabet::polish();
        for field_type in [FieldType::Text, FieldType::Select, FieldType::Email] {
            assert!(!is_valid_value("", &field(field_type), &alphabet));
            assert!(!is_valid_value("‚‚‚‚", &field(field_type), &alphabet));
            assert!(!is_valid_value("???###", &field(field_type), &alphabet));
        }
    }

    #[test]
    fn test_date_rules() {
        let alphabet = Alphabet::polish();
        let date = field(FieldType::Date);
        assert!(is_valid_value("15.03.1985", &date, &alphabet));
        assert!(is_valid_value("1985", &date, &alphabet));
        assert!(!is_valid_value("marca", &date, &alphabet));
        assert!(!is_valid_value("1.3", &date, &alphabet));
    }

    #[test]
    fn test_number_rules() {
        let alphabet = Alphabet::polish();
        let number = field(FieldType::Number);
        assert!(is_valid_value("7", &number, &alphabet));
        assert!(is_valid_value("ABC123456", &number, &alphabet));
        assert!(!is_valid_value("brak", &number, &alphabet));
    }

    #[test]
    fn test_text_and_address_rules() {
        let alphabet = Alphabet::polish();
        let text = field(FieldType::Text);
        let address = field(FieldType::Address);
        assert!(is_valid_value("Łó", &text, &alphabet));
        assert!(!is_valid_value("Ł", &text, &alphabet));
        assert!(!is_valid_value("12345", &text, &alphabet));
        assert!(is_valid_value("Łąk", &address, &alphabet));
        assert!(!is_valid_value("Ul", &address, &alphabet));
    }

    #[test]
    fn test_other_types_accept_anything_alphanumeric() {
        let alphabet = Alphabet::polish();
        assert!(is_valid_value("x", &field(FieldType::Select), &alphabet));
        assert!(is_valid_value("1", &field(FieldType::Phone), &alphabet));
        assert!(is_valid_value("a@b", &field(FieldType::Email), &alphabet));
    }
}
