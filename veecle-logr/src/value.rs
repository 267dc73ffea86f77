//! Values that can be attached to log records.
//!
//! Every key and value handed to a [`Logger`][crate::Logger] is a [`Value`].
//! Key-value sequences are plain slices of values that are read pairwise, `[key, value, key, value, ...]`,
//! where every key must be a [`Value::String`].
//!
//! # Value Types
//!
//! The [`Value`] enum is a closed set of structured data:
//! - **Null**: the absent value
//! - **Bool**: Boolean values (true/false)
//! - **I64** / **U64**: 64-bit integers
//! - **F64**: 64-bit floating-point numbers
//! - **String**: Text values
//! - **List** / **Map**: nested sequences and string-keyed mappings
//!
//! # Encoding
//!
//! Values are rendered with their JSON encoding, see [`Value::encode`].
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use veecle_logr::Value;
//!
//! assert_eq!(Value::from("alice").encode(), r#""alice""#);
//! assert_eq!(Value::from(42).encode(), "42");
//! assert_eq!(Value::from(vec![0.1, 2.5]).encode(), "[0.1,2.5]");
//! assert_eq!(Value::from(BTreeMap::from([("k", 1)])).encode(), r#"{"k":1}"#);
//! assert_eq!(Value::from(None::<bool>).encode(), "null");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};

/// A value that can be stored in a log record.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The absent value, encoded as `null`.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    I64(i64),
    /// A 64-bit unsigned integer, for values that don't fit into [`Value::I64`].
    U64(u64),
    /// A 64-bit floating-point number.
    ///
    /// Non-finite numbers cannot be encoded.
    F64(f64),
    /// A string value.
    String(String),
    /// A nested sequence of values.
    List(Vec<Value>),
    /// A nested mapping, ordered by key.
    Map(BTreeMap<String, Value>),
    /// A value that could not be converted, with the reason.
    ///
    /// It never encodes successfully.
    Unencodable(String),
}

impl Value {
    /// Converts any serializable value into a [`Value`].
    ///
    /// If `value` fails to serialize the result is [`Value::Unencodable`], which renders as an empty string.
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use veecle_logr::Value;
    ///
    /// #[derive(Serialize)]
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let point = Value::from_serialize(&Point { x: 1, y: -2 });
    /// assert_eq!(point.encode(), r#"{"x":1,"y":-2}"#);
    /// ```
    pub fn from_serialize<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(value) => value.into(),
            Err(error) => Value::Unencodable(error.to_string()),
        }
    }

    /// Encodes this value as JSON.
    ///
    /// U+2028 and U+2029 are escaped even though JSON permits them raw, so an encoded value never breaks a line.
    pub fn try_encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self).map(escape_line_separators)
    }

    /// Encodes this value as JSON, rendering values that cannot be encoded as an empty string.
    pub fn encode(&self) -> String {
        self.try_encode().unwrap_or_default()
    }
}

fn escape_line_separators(encoded: String) -> String {
    if !encoded.contains(['\u{2028}', '\u{2029}']) {
        return encoded;
    }
    encoded
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::I64(value) => serializer.serialize_i64(*value),
            Value::U64(value) => serializer.serialize_u64(*value),
            Value::F64(value) if value.is_finite() => serializer.serialize_f64(*value),
            Value::F64(value) => Err(S::Error::custom(format_args!(
                "unsupported float value: {value}"
            ))),
            Value::String(value) => serializer.serialize_str(value),
            Value::List(values) => serializer.collect_seq(values),
            Value::Map(values) => serializer.collect_map(values),
            Value::Unencodable(reason) => Err(S::Error::custom(reason)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A single key-value pair of a flattened sequence.
///
/// Displays as `encode(key)=encode(value)`.
///
/// ```rust
/// use veecle_logr::KeyValue;
///
/// assert_eq!(KeyValue::new("user", "you").to_string(), r#""user"="you""#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    /// The key.
    pub key: String,
    /// The value.
    pub value: Value,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Encoding a `str` cannot fail.
        let key = serde_json::to_string(&self.key)
            .map(escape_line_separators)
            .unwrap_or_default();
        write!(f, "{key}={}", self.value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::String(value.into_owned())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident($target:ty): $($source:ty),*) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_lossless!(I64(i64): i8, i16, i32, i64, u8, u16, u32);
impl_from_lossless!(U64(u64): u64);
impl_from_lossless!(F64(f64): f32, f64);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        // `isize` is at most 64 bits wide on every supported target.
        Value::I64(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::U64(value as u64)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Value>,
{
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Value
where
    T: Into<Value>,
{
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(values: BTreeMap<K, V>) -> Self {
        Value::Map(
            values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(values: HashMap<K, V, S>) -> Self {
        Value::Map(
            values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Value::I64(value)
                } else if let Some(value) = number.as_u64() {
                    Value::U64(value)
                } else {
                    number.as_f64().map_or(Value::Null, Value::F64)
                }
            }
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(values) => values.into(),
            serde_json::Value::Object(values) => Value::Map(
                values
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}
