use crate::config::MapperConfig;
use crate::models::*;
use crate::processing::*;
use crate::schema::load_schema;
use crate::utils::{MapperError, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Entry point for mapping OCR text onto form fields.
///
/// Schemas are loaded and compiled lazily, once per target, and shared by
/// every later call. The service is `Sync` and can sit behind an `Arc` in a
/// request handler.
pub struct MappingService {
    config: MapperConfig,
    matchers: RwLock<HashMap<Target, Arc<FieldMatcher>>>,
}

impl MappingService {
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    pub fn with_config(config: MapperConfig) -> Self {
        MappingService {
            config,
            matchers: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map `raw_text` onto the fields of `target` ("POA" or "OBY").
    pub fn map_document(&self, raw_text: &str, target: &str) -> Result<Vec<MappingResult>> {
        let target = check_request(raw_text, target)?;
        self.map_target(raw_text, target)
    }

    fn map_target(&self, raw_text: &str, target: Target) -> Result<Vec<MappingResult>> {
        let matcher = self.matcher(target)?;
        let mut results = matcher.map_fields(raw_text);

        let min_confidence = self.config.min_confidence;
        if min_confidence > 0 {
            results.retain(|result| result.confidence >= min_confidence);
        }

        info!(
            "Mapped {} of {} {} fields from {} characters",
            results.len(),
            matcher.field_count(),
            target,
            raw_text.chars().count()
        );
        Ok(results)
    }

    /// Full response for a request body, with document metadata attached.
    pub fn map_request(&self, request: &MappingRequest) -> Result<MappingResponse> {
        let target = check_request(&request.text, &request.target)?;
        let fields = self.map_target(&request.text, target)?;

        Ok(MappingResponse {
            total_matches: fields.len(),
            fields,
            target,
            document_type: detect_document_kind(&request.text),
            language: detect_language(&request.text),
            processed_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Field definitions for `target`, loaded from the configured source.
    pub fn schema(&self, target: Target) -> Result<FieldSchema> {
        load_schema(target, &self.config.schema_source())
    }

    fn matcher(&self, target: Target) -> Result<Arc<FieldMatcher>> {
        if let Some(matcher) = self.matchers.read().unwrap_or_else(|e| e.into_inner()).get(&target) {
            return Ok(Arc::clone(matcher));
        }

        let schema = self.schema(target)?;
        let matcher = Arc::new(FieldMatcher::new(&schema, &self.config.alphabet)?);
        debug!("Compiled matcher for {} ({} fields)", target, matcher.field_count());

        let mut matchers = self.matchers.write().unwrap_or_else(|e| e.into_inner());
        // another caller may have compiled the same target meanwhile
        Ok(Arc::clone(matchers.entry(target).or_insert(matcher)))
    }
}

impl Default for MappingService {
    fn default() -> Self {
        Self::new()
    }
}

// Empty text is reported before an unknown target.
fn check_request(raw_text: &str, target: &str) -> Result<Target> {
    if raw_text.trim().is_empty() {
        return Err(MapperError::InvalidInput("Text content is required for mapping".to_string()));
    }
    target.parse()
}

/// ISO 639-3 code of the dominant language, when whatlang is confident.
pub fn detect_language(text: &str) -> Option<String> {
    whatlang::detect(text)
        .filter(|info| info.is_reliable())
        .map(|info| info.lang().code().to_string())
}
