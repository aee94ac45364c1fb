use crate::processing::Alphabet;
use crate::schema::SchemaSource;
use crate::utils::{MapperError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Directory with `poa.json`/`oby.json`; the embedded definitions are
    /// used when unset.
    pub schema_dir: Option<PathBuf>,
    pub alphabet: Alphabet,
    /// Results scoring below this are dropped before they are returned.
    pub min_confidence: u8,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            schema_dir: None,
            alphabet: Alphabet::polish(),
            min_confidence: 0,
        }
    }
}

impl MapperConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MapperError::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config: MapperConfig = serde_json::from_str(&content)
            .map_err(|e| MapperError::ConfigError(format!("Failed to parse {}: {}", path.display(), e)))?;

        // a bare name such as {"name": "pl"} selects a built-in alphabet
        if config.alphabet.upper.is_empty() && config.alphabet.lower.is_empty() {
            config.alphabet = Alphabet::by_name(&config.alphabet.name).ok_or_else(|| {
                MapperError::ConfigError(format!(
                    "unknown alphabet {:?}: give its upper and lower letters or use pl/latin",
                    config.alphabet.name
                ))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_confidence > 100 {
            return Err(MapperError::ConfigError(format!(
                "min_confidence must be between 0 and 100, got {}",
                self.min_confidence
            )));
        }
        if self.alphabet.name.trim().is_empty() {
            return Err(MapperError::ConfigError("alphabet name must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn schema_source(&self) -> SchemaSource {
        SchemaSource::from_dir(self.schema_dir.as_deref())
    }
}
