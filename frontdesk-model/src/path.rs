//! Dotted field paths (`"customers.name"`, `"items.0.sku"`).
//!
//! A path is parsed once into segments. Object segments look up a key, array
//! segments parse as a decimal index. Resolution is total: anything that does
//! not lead to a value yields `None` instead of an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step of a [`FieldPath`].
pub type Segment = String;

/// A dot-delimited address into a schema-free record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parses a dotted path. Never fails; malformed paths simply resolve to nothing.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split('.').map(str::to_owned).collect()
        };
        Self { raw, segments }
    }

    /// Returns the path exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if this path can never resolve (empty path or empty segment).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.segments.is_empty() || self.segments.iter().any(String::is_empty)
    }

    /// Walks `root` along this path.
    ///
    /// Missing keys, out-of-range indices and descending into scalars all
    /// resolve to `None`.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        if self.is_degenerate() {
            return None;
        }
        self.segments
            .iter()
            .try_fold(root, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

/// Anything a [`FieldPath`] can be resolved against.
///
/// The grid engines are generic over this trait so screens can hand them
/// [`Record`](crate::Record)s, bare JSON values, or their own row types.
pub trait FieldSource {
    /// Resolves `path` to a JSON value, or `None` when it leads nowhere.
    fn field(&self, path: &FieldPath) -> Option<&Value>;

    /// The value paths are resolved against, when there is a single one.
    fn root(&self) -> Option<&Value> {
        None
    }
}

impl FieldSource for Value {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve(self)
    }

    fn root(&self) -> Option<&Value> {
        Some(self)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, path: &FieldPath) -> Option<&Value> {
        (**self).field(path)
    }

    fn root(&self) -> Option<&Value> {
        (**self).root()
    }
}
