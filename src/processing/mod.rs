pub mod alphabet;
pub mod confidence;
pub mod document_kind;
pub mod field_matcher;
pub mod strategies;
pub mod tokenizer;
pub mod validity;

pub use alphabet::Alphabet;
pub use confidence::calculate_confidence;
pub use document_kind::detect_document_kind;
pub use field_matcher::{map_fields, FieldMatcher};
pub use tokenizer::{tokenize, TokenizedText};
pub use validity::is_valid_value;
