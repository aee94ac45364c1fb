use crate::models::{FieldSchema, Target};
use crate::utils::{MapperError, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const EMBEDDED_POA: &str = include_str!("../../data/fields/poa.json");
const EMBEDDED_OBY: &str = include_str!("../../data/fields/oby.json");

/// Where field definitions are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// The definitions compiled into the crate.
    Embedded,
    /// A directory holding `poa.json` and `oby.json`.
    Directory(PathBuf),
}

impl SchemaSource {
    pub fn from_dir(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => SchemaSource::Directory(dir.to_path_buf()),
            None => SchemaSource::Embedded,
        }
    }
}

pub fn load_schema(target: Target, source: &SchemaSource) -> Result<FieldSchema> {
    let contents;
    let json: &str = match source {
        SchemaSource::Embedded => match target {
            Target::Poa => EMBEDDED_POA,
            Target::Oby => EMBEDDED_OBY,
        },
        SchemaSource::Directory(dir) => {
            let path = dir.join(target.schema_file_name());
            debug!("Reading {} field definitions from {}", target, path.display());
            contents = fs::read_to_string(&path).map_err(|e| {
                MapperError::SchemaLoadError(format!(
                    "Could not load field definitions for {} from {}: {}",
                    target,
                    path.display(),
                    e
                ))
            })?;
            &contents
        }
    };

    let schema = parse_schema(target, json)?;
    info!("Loaded {} field definitions for {}", schema.len(), target);
    Ok(schema)
}

/// Parse and normalise a schema document. Aliases are lowercased and
/// de-duplicated; empty or repeated field codes are rejected.
pub fn parse_schema(target: Target, json: &str) -> Result<FieldSchema> {
    let mut schema: FieldSchema = serde_json::from_str(json).map_err(|e| {
        MapperError::SchemaLoadError(format!("Could not parse field definitions for {}: {}", target, e))
    })?;

    let mut seen = HashSet::new();
    for field in &mut schema.fields {
        if field.code.trim().is_empty() {
            return Err(MapperError::SchemaLoadError(format!(
                "Field with labels {:?}/{:?} in {} has an empty code",
                field.pl_label, field.en_label, target
            )));
        }
        if !seen.insert(field.code.clone()) {
            return Err(MapperError::SchemaLoadError(format!(
                "Duplicate field code {} in {}",
                field.code, target
            )));
        }

        let mut aliases: Vec<String> = Vec::with_capacity(field.aliases.len());
        for alias in field.aliases.drain(..) {
            let alias = alias.trim().to_lowercase();
            if !alias.is_empty() && !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }
        field.aliases = aliases;
    }

    Ok(schema)
}
