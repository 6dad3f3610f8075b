//! Shallow and deep copying.
//!
//! A shallow copy rebuilds the top-level container but keeps the same
//! nested values, so nested backings stay shared with the source. A deep
//! copy rebuilds everything, sharing nothing at any depth. The difference
//! is observable through [`Value::shares_backing`].

use wicker_foundation::Value;

/// Returns a copy with a fresh top-level container.
///
/// The copy's elements are the same values as the source's: for a list of
/// records, `copy.shares_backing(&source)` is false while each copied
/// record still shares backing with its original.
#[must_use]
pub fn shallow_copy(value: &Value) -> Value {
    match value {
        Value::List(v) => Value::List(v.iter().cloned().collect()),
        Value::Set(s) => Value::Set(s.iter().cloned().collect()),
        Value::Map(m) => Value::Map(m.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        scalar => scalar.clone(),
    }
}

/// Returns a copy sharing no backing with the source at any depth.
///
/// Containers are rebuilt recursively and strings are reallocated, so no
/// identity test against the source can ever succeed.
#[must_use]
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::List(v) => Value::List(v.iter().map(deep_copy).collect()),
        Value::Set(s) => Value::Set(s.iter().map(deep_copy).collect()),
        Value::Map(m) => Value::Map(
            m.iter()
                .map(|(k, v)| (deep_copy(k), deep_copy(v)))
                .collect(),
        ),
        Value::String(s) => Value::String(s.as_ref().into()),
        scalar => scalar.clone(),
    }
}
