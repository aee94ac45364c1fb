use super::Target;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extraction heuristic that produced a candidate, in decreasing specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    LabelValue,
    TypePattern,
    Context,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::LabelValue => write!(f, "label-value"),
            Strategy::TypePattern => write!(f, "type-pattern"),
            Strategy::Context => write!(f, "context"),
        }
    }
}

/// A value proposed by one strategy for one field. Lives only for the
/// duration of a single field match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub value: String,
    pub confidence: u8,
    pub strategy: Strategy,
}

impl MatchCandidate {
    pub fn new(value: impl Into<String>, confidence: u8, strategy: Strategy) -> Self {
        MatchCandidate {
            value: value.into(),
            confidence,
            strategy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResult {
    pub code: String,
    pub value: String,
    pub confidence: u8,
}

/// Body of a mapping request as received from the HTTP layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target: String,
}

/// Kind of source document, guessed from bilingual title markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "Birth Certificate")]
    BirthCertificate,
    #[serde(rename = "Passport")]
    Passport,
    #[serde(rename = "Marriage Certificate")]
    MarriageCertificate,
    #[serde(rename = "Death Certificate")]
    DeathCertificate,
    #[serde(rename = "Unknown Document Type")]
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub fields: Vec<MappingResult>,
    pub target: Target,
    pub total_matches: usize,
    pub document_type: DocumentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub processed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: MappingRequest = serde_json::from_str(r#"{"target": "POA"}"#).unwrap();
        assert_eq!(request.text, "");
        assert_eq!(request.target, "POA");
    }

    #[test]
    fn test_response_shape() {
        let response = MappingResponse {
            fields: vec![MappingResult {
                code: "POA-A-SN".to_string(),
                value: "KOWALSKI".to_string(),
                confidence: 90,
            }],
            target: Target::Poa,
            total_matches: 1,
            document_type: DocumentKind::Passport,
            language: None,
            processed_at: "2025-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["fields"][0]["code"], "POA-A-SN");
        assert_eq!(json["fields"][0]["confidence"], 90);
        assert_eq!(json["target"], "POA");
        assert_eq!(json["totalMatches"], 1);
        assert_eq!(json["documentType"], "Passport");
        assert!(json.get("language").is_none());
    }
}
