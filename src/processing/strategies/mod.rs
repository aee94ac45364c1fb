// Extraction heuristics for a single field, from most to least specific.
//
// Each strategy looks at the tokenized document and one compiled field and
// proposes at most one candidate. The field matcher decides which strategies
// run and which candidate wins.

pub mod context;
pub mod label_value;
pub mod type_pattern;

pub use context::ContextStrategy;
pub use label_value::{LabelPatterns, LabelValueStrategy};
pub use type_pattern::{TypePatternStrategy, TypePatterns};

use super::{Alphabet, TokenizedText};
use crate::models::{FieldDescriptor, MatchCandidate, Strategy};
use crate::utils::Result;

pub trait MatchStrategy: Send + Sync {
    fn kind(&self) -> Strategy;

    /// Best candidate this strategy can offer for `field`, if any.
    fn find(&self, doc: &TokenizedText, field: &CompiledField) -> Option<MatchCandidate>;
}

/// A field descriptor together with everything derived from it that the
/// strategies need, built once per schema.
#[derive(Debug, Clone)]
pub struct CompiledField {
    pub descriptor: FieldDescriptor,
    /// Lowercased, de-duplicated, non-empty labels in matching order.
    pub labels: Vec<String>,
    pub label_patterns: Vec<LabelPatterns>,
}

impl CompiledField {
    pub fn compile(descriptor: &FieldDescriptor, alphabet: &Alphabet) -> Result<Self> {
        let mut labels: Vec<String> = Vec::new();
        for label in descriptor.labels() {
            let label = label.trim().to_string();
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }

        let label_patterns = labels
            .iter()
            .map(|label| LabelPatterns::compile(&descriptor.code, label, alphabet))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledField {
            descriptor: descriptor.clone(),
            labels,
            label_patterns,
        })
    }

    pub fn code(&self) -> &str {
        &self.descriptor.code
    }
}
