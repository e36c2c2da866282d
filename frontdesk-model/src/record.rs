use crate::path::{FieldPath, FieldSource};
use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schema-free row displayed on one of the list screens.
///
/// Every backend payload flows through this type. The `data` field holds
/// arbitrary JSON whose shape belongs to the screen that renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub collection: String,
    pub data: Value,
    pub created_at: i64,
    pub modified_at: i64,
}

impl Record {
    /// Builds a record, rejecting payloads that are not JSON objects.
    pub fn new(
        id: impl Into<String>,
        collection: impl Into<String>,
        data: Value,
        timestamp_ms: i64,
    ) -> ModelResult<Self> {
        if !data.is_object() {
            return Err(ModelError::not_an_object(&data));
        }
        Ok(Self {
            id: id.into(),
            collection: collection.into(),
            data,
            created_at: timestamp_ms,
            modified_at: timestamp_ms,
        })
    }

    /// Parses a record from its JSON representation.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record to JSON.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Extract a string value from `data` using a dotted path (e.g., "patient.name").
    pub fn get_str(&self, path: &str) -> Option<&str> {
        FieldPath::new(path).resolve(&self.data).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a dotted path.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        FieldPath::new(path).resolve(&self.data).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a dotted path.
    pub fn get_number(&self, path: &str) -> Option<f64> {
        FieldPath::new(path).resolve(&self.data).and_then(|v| v.as_f64())
    }
}

impl FieldSource for Record {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve(&self.data)
    }

    fn root(&self) -> Option<&Value> {
        Some(&self.data)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
