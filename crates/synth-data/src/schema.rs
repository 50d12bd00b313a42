//! Schema types: field descriptors, coarse field types and records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::builder::default_rows;

/// One generated row. Keys keep the order of the descriptors that produced them.
pub type Record = Map<String, Value>;

/// Schema entry naming one output column and its coarse type.
///
/// Both parts are optional on the wire. A missing name becomes an empty key and
/// a missing type is treated like any other unrecognized type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            field_type: Some(field_type.into()),
        }
    }

    /// The output key for this field.
    pub fn key(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The declared type, parsed.
    pub fn kind(&self) -> FieldType {
        FieldType::parse(self.field_type.as_deref())
    }
}

/// Coarse declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int,
    Float,
    Bool,
    Date,
    /// Anything else, including a missing type.
    Other,
}

impl FieldType {
    /// Parses a declared type. Matching is exact: `"Int"` is not `int`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("string") => Self::String,
            Some("int") => Self::Int,
            Some("float") => Self::Float,
            Some("bool" | "boolean") => Self::Bool,
            Some("date") => Self::Date,
            _ => Self::Other,
        }
    }
}

/// A schema plus the number of records wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Seeds the random source for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Generated records, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub records: Vec<Record>,
}

/// Normalizes a field name for heuristic matching: lowercase, spaces to underscores.
pub fn normalize_field_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
