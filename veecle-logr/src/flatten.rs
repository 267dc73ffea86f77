//! Flattening of key-value sequences into a single line.
//!
//! A key-value sequence is read pairwise as `[key, value, key, value, ...]` and rendered as
//! `encode(key)=encode(value)` pairs, sorted by key and separated by a single space.
//! The output only depends on the pairs, not on their order in the input.
//!
//! - A sequence of odd length pairs its last key with [`Value::Null`].
//! - If a key occurs more than once, the value of the last occurrence wins.
//! - A value that fails to encode renders as an empty string without affecting the other pairs.
//! - A key that is not a [`Value::String`] is a bug at the call site, see [`flatten`].
//!
//! ```rust
//! use veecle_logr::flatten::flatten;
//! use veecle_logr::values;
//!
//! assert_eq!(flatten(values!("b", 2, "a", "x", "b", 3)), r#""a"="x" "b"=3"#);
//! assert_eq!(flatten(values!("onlyKey")), r#""onlyKey"=null"#);
//! assert_eq!(flatten(values!()), "");
//! ```

use std::collections::BTreeMap;

use crate::value::{KeyValue, Value};

/// A key in a key-value sequence was not a string.
///
/// This always indicates a bug in the code emitting the record, it is never a runtime condition to recover from.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("key at index {index} is not a string: {found}")]
pub struct MalformedKeyError {
    /// Index of the offending key within the sequence.
    pub index: usize,
    /// The value found in key position.
    pub found: Value,
}

/// Decomposes `kv_list` into its key-value pairs, in input order.
///
/// Duplicate keys are kept, a trailing key without value is paired with [`Value::Null`].
pub fn pairs(kv_list: &[Value]) -> impl Iterator<Item = Result<KeyValue, MalformedKeyError>> + '_ {
    kv_list
        .iter()
        .enumerate()
        .step_by(2)
        .map(|(index, key)| {
            let Value::String(key) = key else {
                return Err(MalformedKeyError {
                    index,
                    found: key.clone(),
                });
            };
            let value = kv_list.get(index + 1).cloned().unwrap_or(Value::Null);
            Ok(KeyValue::new(key.clone(), value))
        })
}

/// Flattens `kv_list` into a single line, failing on the first key that is not a string.
pub fn try_flatten(kv_list: &[Value]) -> Result<String, MalformedKeyError> {
    let mut latest = BTreeMap::new();
    for pair in pairs(kv_list) {
        let KeyValue { key, value } = pair?;
        latest.insert(key, value);
    }

    let mut output = String::new();
    for (key, value) in latest {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&KeyValue { key, value }.to_string());
    }
    Ok(output)
}

/// Flattens `kv_list` into a single line.
///
/// # Panics
///
/// If any key in `kv_list` is not a [`Value::String`].
/// Use [`try_flatten`] to inspect the [`MalformedKeyError`] instead.
#[track_caller]
pub fn flatten(kv_list: &[Value]) -> String {
    match try_flatten(kv_list) {
        Ok(flattened) => flattened,
        Err(error) => panic!("{error}"),
    }
}
