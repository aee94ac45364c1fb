use crate::utils::MapperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value kind of a form field. Governs which type patterns apply and how a
/// candidate value is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Date,
    Number,
    Address,
    Select,
    Email,
    Phone,
    File,
    Textarea,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::Address => "address",
            FieldType::Select => "select",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::File => "file",
            FieldType::Textarea => "textarea",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One extractable field of a form schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub code: String,
    pub pl_label: String,
    pub en_label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl FieldDescriptor {
    /// Given-name and surname fields get extra treatment in scoring and in
    /// the type patterns.
    pub fn is_name_field(&self) -> bool {
        self.code.contains("-GN") || self.code.contains("-SN")
    }

    /// All labels in matching order: Polish, English, then aliases, lowercased.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.aliases.len() + 2);
        labels.push(normalize_label(&self.pl_label));
        labels.push(normalize_label(&self.en_label));
        labels.extend(self.aliases.iter().map(|alias| normalize_label(alias)));
        labels
    }

    /// True when `label` is one of the two canonical labels rather than an
    /// alias. Compared the same way `labels` normalises them.
    pub fn is_canonical_label(&self, label: &str) -> bool {
        let label = normalize_label(label);
        label == normalize_label(&self.pl_label) || label == normalize_label(&self.en_label)
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// The field list of one target form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl FieldSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        FieldSchema { form_type: None, version: None, fields }
    }

    pub fn get(&self, code: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.code == code)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Form family being populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Target {
    /// Power of attorney (pełnomocnictwo).
    Poa,
    /// Citizenship application (wniosek o obywatelstwo).
    Oby,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Poa, Target::Oby];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Poa => "POA",
            Target::Oby => "OBY",
        }
    }

    /// File name of the schema document for this target.
    pub fn schema_file_name(&self) -> &'static str {
        match self {
            Target::Poa => "poa.json",
            Target::Oby => "oby.json",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POA" => Ok(Target::Poa),
            "OBY" => Ok(Target::Oby),
            _ => Err(MapperError::SchemaNotFound(format!(
                "target must be either \"POA\" or \"OBY\", got \"{}\"",
                s
            ))),
        }
    }
}
