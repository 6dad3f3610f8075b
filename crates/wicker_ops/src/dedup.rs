//! Deduplication and sequence intersection.
//!
//! The classic recipe: pour the sequence through a set to drop repeats,
//! keeping first-occurrence order, then use membership in a second
//! sequence to intersect.

use wicker_foundation::{Result, Value, WkSet, WkVec};

use crate::as_list;

/// Returns a new sequence containing each distinct value once, in
/// first-occurrence order.
pub fn distinct(seq: &Value) -> Result<Value> {
    let list = as_list(seq)?;
    Ok(Value::List(distinct_list(&list)))
}

/// Returns the deduplicated elements of `a` that appear anywhere in `b`.
///
/// Duplicates in `b` are irrelevant; it only contributes membership.
pub fn intersect(a: &Value, b: &Value) -> Result<Value> {
    let first = as_list(a)?;
    let second = as_list(b)?;
    let members: WkSet<Value> = second.iter().cloned().collect();
    Ok(Value::List(
        distinct_list(&first)
            .iter()
            .filter(|item| members.contains(item))
            .cloned()
            .collect(),
    ))
}

fn distinct_list(list: &WkVec<Value>) -> WkVec<Value> {
    let mut seen = WkSet::new();
    let mut result = WkVec::new();
    for item in list.iter() {
        if !seen.contains(item) {
            seen = seen.insert(item.clone());
            result = result.push_back(item.clone());
        }
    }
    result
}
