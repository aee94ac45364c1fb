use super::strategies::{CompiledField, ContextStrategy, LabelValueStrategy, MatchStrategy, TypePatternStrategy};
use super::{Alphabet, TokenizedText};
use crate::models::{FieldSchema, MappingResult, MatchCandidate};
use crate::utils::Result;
use log::{debug, trace};

/// Below this, a label/value result is weak enough to try the type patterns.
pub const TYPE_PATTERN_THRESHOLD: u8 = 70;
/// Below this, the contextual proximity search is tried as a last resort.
pub const CONTEXT_THRESHOLD: u8 = 60;

/// Runs the matching strategies over every field of one schema.
///
/// All patterns are compiled up front, so a `FieldMatcher` is built once per
/// schema and then shared between any number of concurrent mapping calls.
pub struct FieldMatcher {
    fields: Vec<CompiledField>,
    // (strategy, only run while the best confidence is below this)
    pipeline: Vec<(Box<dyn MatchStrategy>, Option<u8>)>,
}

impl FieldMatcher {
    pub fn new(schema: &FieldSchema, alphabet: &Alphabet) -> Result<Self> {
        let fields = schema
            .fields
            .iter()
            .map(|field| CompiledField::compile(field, alphabet))
            .collect::<Result<Vec<_>>>()?;

        let pipeline: Vec<(Box<dyn MatchStrategy>, Option<u8>)> = vec![
            (Box::new(LabelValueStrategy::new(alphabet.clone())), None),
            (Box::new(TypePatternStrategy::new(alphabet.clone())?), Some(TYPE_PATTERN_THRESHOLD)),
            (Box::new(ContextStrategy::new(alphabet.clone())), Some(CONTEXT_THRESHOLD)),
        ];

        Ok(FieldMatcher { fields, pipeline })
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Best value for every field found in `text`, sorted by descending
    /// confidence. Fields without any candidate are left out.
    pub fn map_fields(&self, text: &str) -> Vec<MappingResult> {
        let doc = TokenizedText::new(text);

        let mut results: Vec<MappingResult> = self
            .fields
            .iter()
            .filter_map(|field| {
                let best = self.best_candidate(&doc, field)?;
                debug!(
                    "{} = {:?} (confidence {}, {})",
                    field.code(),
                    best.value,
                    best.confidence,
                    best.strategy
                );
                Some(MappingResult {
                    code: field.code().to_string(),
                    value: best.value,
                    confidence: best.confidence,
                })
            })
            .collect();

        // stable: equal confidences keep schema order
        results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        results
    }

    /// Escalate through the strategies until one is confident enough.
    /// A later strategy only replaces the current best when strictly better.
    pub fn best_candidate(&self, doc: &TokenizedText, field: &CompiledField) -> Option<MatchCandidate> {
        let mut best: Option<MatchCandidate> = None;

        for (strategy, run_below) in &self.pipeline {
            let current = best.as_ref().map_or(0, |candidate| candidate.confidence);
            if run_below.is_some_and(|threshold| current >= threshold) {
                continue;
            }

            if let Some(candidate) = strategy.find(doc, field) {
                trace!("{}: {} proposed {:?} at {}", field.code(), strategy.kind(), candidate.value, candidate.confidence);
                if candidate.confidence > current {
                    best = Some(candidate);
                }
            }
        }

        best
    }
}

/// Map `text` against `schema` in one go. Compiles the schema's patterns on
/// every call; keep a [`FieldMatcher`] around when mapping repeatedly.
pub fn map_fields(text: &str, schema: &FieldSchema, alphabet: &Alphabet) -> Result<Vec<MappingResult>> {
    Ok(FieldMatcher::new(schema, alphabet)?.map_fields(text))
}
