//! Conversions between collection shapes.
//!
//! Several operations only make sense over a list, so collection-like
//! values (sets, maps, strings) get converted first. This is also where
//! map entries become iterable key/value pairs.

use wicker_foundation::{Error, Result, Type, Value, WkSet, WkVec};

use crate::seq::sorted_by;

/// Converts a collection-like value into a list.
///
/// Lists pass through, sets lose their shape but keep their elements (in
/// unspecified order), maps become `[key, value]` pair lists, and strings
/// split into single-character strings. `nil` is the empty list.
pub fn to_list(value: &Value) -> Result<Value> {
    match value {
        Value::List(v) => Ok(Value::List(v.clone())),
        Value::Set(s) => Ok(Value::List(s.iter().cloned().collect())),
        Value::Map(_) => entries(value),
        Value::String(s) => Ok(Value::List(
            s.chars()
                .map(|c| Value::String(c.to_string().into()))
                .collect(),
        )),
        Value::Nil => Ok(Value::List(WkVec::new())),
        other => Err(Error::type_mismatch(
            Type::list(Type::Any),
            other.value_type(),
        )),
    }
}

/// Converts a sequence into a set, dropping duplicates and order.
pub fn to_set(value: &Value) -> Result<Value> {
    match value {
        Value::List(v) => Ok(Value::Set(v.iter().cloned().collect())),
        Value::Set(s) => Ok(Value::Set(s.clone())),
        Value::Nil => Ok(Value::Set(WkSet::new())),
        other => Err(Error::type_mismatch(
            Type::set(Type::Any),
            other.value_type(),
        )),
    }
}

/// Returns a map's entries as a list of `[key, value]` pair lists.
///
/// Entries are sorted by key so the result is deterministic even though
/// the map itself has no iteration order.
pub fn entries(map: &Value) -> Result<Value> {
    match map {
        Value::Map(m) => {
            let pairs = Value::List(
                m.iter()
                    .map(|(k, v)| Value::list([k.clone(), v.clone()]))
                    .collect(),
            );
            sorted_by(&pairs, |a, b| {
                let a = a.as_list().and_then(WkVec::first);
                let b = b.as_list().and_then(WkVec::first);
                match (a, b) {
                    (Some(a), Some(b)) => a
                        .partial_cmp(b)
                        .unwrap_or_else(|| a.to_string().cmp(&b.to_string())),
                    _ => std::cmp::Ordering::Equal,
                }
            })
        }
        Value::Nil => Ok(Value::List(WkVec::new())),
        other => Err(Error::type_mismatch(
            Type::map(Type::Any, Type::Any),
            other.value_type(),
        )),
    }
}
