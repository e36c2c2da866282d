//! Search box filtering.

use frontdesk_model::{FieldPath, FieldSource};
use serde_json::Value;

/// Case-insensitive substring search over a set of field paths.
///
/// An empty query matches every row. With no field paths configured the
/// search runs over the row's top-level scalar fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
    fields: Vec<FieldPath>,
}

impl SearchFilter {
    #[must_use]
    pub fn new<I, P>(query: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        Self {
            query: query.trim().to_lowercase(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalized (trimmed, lower-cased) query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldPath] {
        &self.fields
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Replaces the query, keeping the searched fields.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    /// Returns true if `item` should stay visible.
    #[must_use]
    pub fn matches<T: FieldSource>(&self, item: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        if self.fields.is_empty() {
            return self.matches_any_top_level(item);
        }
        self.fields
            .iter()
            .any(|path| item.field(path).is_some_and(|v| self.value_matches(v)))
    }

    fn matches_any_top_level<T: FieldSource>(&self, item: &T) -> bool {
        match item.root() {
            Some(Value::Object(map)) => map.values().any(|v| self.value_matches(v)),
            Some(scalar) => self.value_matches(scalar),
            None => false,
        }
    }

    fn value_matches(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => s.to_lowercase().contains(&self.query),
            Value::Number(n) => n.to_string().contains(&self.query),
            Value::Bool(b) => b.to_string().contains(&self.query),
            _ => false,
        }
    }
}
