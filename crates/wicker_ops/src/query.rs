//! Predicate queries over sequences.
//!
//! `any` and `all` answer whether a match exists; `find_first` and
//! `find_last` hand the matching element back. All of them stop work as
//! soon as the answer is known.

use wicker_foundation::{Result, Value};

use crate::as_list;

/// Returns true if the sequence contains `item`.
///
/// Also accepts a set, where membership is a direct lookup.
pub fn contains(coll: &Value, item: &Value) -> Result<bool> {
    if let Value::Set(s) = coll {
        return Ok(s.contains(item));
    }
    let list = as_list(coll)?;
    Ok(list.iter().any(|candidate| candidate == item))
}

/// Returns true if any element satisfies the predicate.
///
/// Short-circuits on the first match; false for an empty sequence.
pub fn any(seq: &Value, pred: impl Fn(&Value) -> bool) -> Result<bool> {
    let list = as_list(seq)?;
    Ok(list.iter().any(|item| pred(item)))
}

/// Returns true if every element satisfies the predicate.
///
/// Short-circuits on the first failure; vacuously true for an empty
/// sequence.
pub fn all(seq: &Value, pred: impl Fn(&Value) -> bool) -> Result<bool> {
    let list = as_list(seq)?;
    Ok(list.iter().all(|item| pred(item)))
}

/// Returns the first element satisfying the predicate, searching from the
/// front.
pub fn find_first(seq: &Value, pred: impl Fn(&Value) -> bool) -> Result<Option<Value>> {
    let list = as_list(seq)?;
    Ok(list.iter().find(|item| pred(item)).cloned())
}

/// Returns the last element satisfying the predicate.
pub fn find_last(seq: &Value, pred: impl Fn(&Value) -> bool) -> Result<Option<Value>> {
    let list = as_list(seq)?;
    let mut found = None;
    for item in list.iter() {
        if pred(item) {
            found = Some(item.clone());
        }
    }
    Ok(found)
}
