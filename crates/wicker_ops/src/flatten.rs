//! Nesting reduction and flat-map.
//!
//! `flatten` removes exactly `depth` levels of nesting; anything nested
//! deeper survives. `flat_map` is map followed by a single level of
//! flattening of each transformed element.

use wicker_foundation::{Result, Value, WkVec};

use crate::as_list;

/// Returns a copy of the sequence with nesting reduced by exactly `depth`
/// levels.
///
/// Depth 0 is the identity. Only lists are spliced; every other value is
/// carried over as-is.
pub fn flatten(seq: &Value, depth: usize) -> Result<Value> {
    let list = as_list(seq)?;
    if depth == 0 {
        return Ok(Value::List(list));
    }
    let mut out = WkVec::new();
    splice_into(&list, depth, &mut out);
    Ok(Value::List(out))
}

/// Flattens exactly one level of nesting, the common case.
pub fn flatten_one(seq: &Value) -> Result<Value> {
    flatten(seq, 1)
}

/// Applies `f` to every element and flattens one level of each result.
///
/// When `f` returns a list its elements are spliced into the output;
/// any other return value is pushed as a single element.
pub fn flat_map(seq: &Value, f: impl Fn(&Value) -> Value) -> Result<Value> {
    let list = as_list(seq)?;
    let mut out = WkVec::new();
    for item in list.iter() {
        match f(item) {
            Value::List(inner) => {
                for x in inner.iter() {
                    out = out.push_back(x.clone());
                }
            }
            other => {
                out = out.push_back(other);
            }
        }
    }
    Ok(Value::List(out))
}

/// Splices `list` into `out`, descending `remaining` more levels into
/// nested lists.
fn splice_into(list: &WkVec<Value>, remaining: usize, out: &mut WkVec<Value>) {
    for item in list.iter() {
        match item {
            Value::List(inner) if remaining > 0 => {
                splice_into(inner, remaining - 1, out);
            }
            other => {
                *out = out.push_back(other.clone());
            }
        }
    }
}
