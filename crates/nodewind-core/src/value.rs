//! Loosely typed values as delivered by the design-tool host.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A scalar field read from a host node.
///
/// Hosts send geometry and style attributes without a stable type: a
/// width can be a number, a numeric string, `null`, absent, or a symbolic
/// marker meaning "mixed across the selection". Every reader goes through
/// the coercion functions in [`crate::coerce`] instead of matching on this
/// directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// The field was not present.
    #[default]
    Missing,
    /// Explicit `null`.
    Null,
    Number(f64),
    Text(String),
    Flag(bool),
    /// Unresolved symbolic marker (mixed values and similar placeholders).
    Mixed,
}

impl FieldValue {
    /// True for values that carry no data at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Missing | FieldValue::Null)
    }

    /// Get as number if it's a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string if it's a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => write!(f, "undefined"),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Mixed => write!(f, "<mixed>"),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Flag(b),
            // Numbers outside f64 range still deserialize; NaN cannot occur in JSON.
            serde_json::Value::Number(n) => n.as_f64().map_or(FieldValue::Mixed, FieldValue::Number),
            serde_json::Value::String(s) => FieldValue::Text(s),
            // Hosts serialize symbols (e.g. `figma.mixed`) as objects.
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => FieldValue::Mixed,
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(FieldValue::from)
    }
}
