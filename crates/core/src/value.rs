//! Loosely typed input values and the nil/empty predicates over them.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A plain value as handed to the loosely typed helpers.
#[derive(Debug, Clone, PartialEq, Default)]
#[non_exhaustive]
pub enum Value {
    /// Absence of a value.
    #[default]
    Nil,
    Text(String),
    Sequence(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
    Number(f64),
    Boolean(bool),
    /// Raw bytes, e.g. a 12-byte object id.
    Binary(Vec<u8>),
    /// Anything without emptiness semantics (functions, dates, handles).
    Other,
}

impl Value {
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Empty text, sequence, mapping or byte buffer.
    ///
    /// `Nil`, numbers (including zero), booleans and `Other` are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Sequence(items) => items.is_empty(),
            Self::Mapping(map) => map.is_empty(),
            Self::Binary(bytes) => bytes.is_empty(),
            Self::Nil | Self::Number(_) | Self::Boolean(_) | Self::Other => false,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Wraps raw bytes. There is no `From<Vec<u8>>`, so owned buffers go through here.
    #[must_use]
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Binary(bytes.into())
    }

    /// Short name of the variant, used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Binary(_) => "binary",
            Self::Other => "other",
        }
    }
}

/// Scalar values render as their plain text; containers render as a
/// comma-joined list of their items.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
            Self::Binary(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{byte}")?;
                }
                Ok(())
            },
            Self::Mapping(_) | Self::Other => f.write_str("[object]"),
        }
    }
}

/// `true` if `x` is nil.
#[must_use]
pub const fn is_nil(x: &Value) -> bool {
    x.is_nil()
}

/// `true` if `x` is empty text, an empty sequence, an empty mapping or empty bytes.
#[must_use]
pub fn is_empty(x: &Value) -> bool {
    x.is_empty()
}

#[must_use]
pub const fn is_not_nil(x: &Value) -> bool {
    !is_nil(x)
}

#[must_use]
pub fn is_not_empty(x: &Value) -> bool {
    !is_empty(x)
}

#[must_use]
pub fn is_nil_or_empty(x: &Value) -> bool {
    is_nil(x) || is_empty(x)
}

#[must_use]
pub fn is_not_nil_and_not_empty(x: &Value) -> bool {
    !is_nil(x) && !is_empty(x)
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

#[allow(clippy::cast_precision_loss, reason = "mirrors a double-precision number value")]
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

#[allow(clippy::cast_precision_loss, reason = "mirrors a double-precision number value")]
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Self::Binary(bytes.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Other, Self::Number),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            },
            serde_json::Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            },
        }
    }
}
