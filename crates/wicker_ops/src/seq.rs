//! Building, reordering, and reshaping sequences.
//!
//! These are the non-destructive replacements for in-place edits: instead
//! of deleting, sorting, or appending within a sequence, each operation
//! leaves its input alone and returns a new one.

use std::cmp::Ordering;

use wicker_foundation::{Error, Result, Value};

use crate::as_list;

/// Returns a new sequence omitting the element at `index`.
///
/// An out-of-range index yields the sequence unchanged; there is nothing
/// at that position to exclude.
pub fn exclude_at(seq: &Value, index: usize) -> Result<Value> {
    let list = as_list(seq)?;
    Ok(Value::List(list.without_index(index)))
}

/// Returns a new sequence with the element at `index` replaced by `value`.
///
/// Unlike [`exclude_at`], replacing demands a real position: an
/// out-of-range index is an error.
pub fn replace_at(seq: &Value, index: usize, value: Value) -> Result<Value> {
    let list = as_list(seq)?;
    let length = list.len();
    list.update(index, value)
        .map(Value::List)
        .ok_or_else(|| Error::index_out_of_bounds(index, length))
}

/// Builds a sequence of length `len` where element `i` is `f(i)`.
#[must_use]
pub fn fill_map(len: usize, f: impl Fn(usize) -> Value) -> Value {
    Value::List((0..len).map(f).collect())
}

/// Returns a sorted copy of the sequence using the default value ordering.
///
/// Mixed-type sequences group by type first (nil, bools, numbers,
/// strings, then containers). Within a group, numbers sort numerically
/// (ints and floats together), strings lexicographically, bools
/// false-first, and containers by their printed form. The order is total,
/// so sorting never panics.
pub fn sorted(seq: &Value) -> Result<Value> {
    sorted_by(seq, default_compare)
}

/// Returns a sorted copy of the sequence using a caller-supplied comparator.
///
/// The sort is stable: elements the comparator considers equal keep their
/// original relative order. The input is never reordered.
pub fn sorted_by(seq: &Value, cmp: impl Fn(&Value, &Value) -> Ordering) -> Result<Value> {
    let list = as_list(seq)?;
    let mut items: Vec<Value> = list.iter().cloned().collect();
    items.sort_by(|a, b| cmp(a, b));
    Ok(Value::List(items.into_iter().collect()))
}

/// Returns a reversed copy of the sequence.
pub fn reversed(seq: &Value) -> Result<Value> {
    let list = as_list(seq)?;
    let mut items: Vec<Value> = list.iter().cloned().collect();
    items.reverse();
    Ok(Value::List(items.into_iter().collect()))
}

/// Returns a new sequence with all elements of `a` followed by all
/// elements of `b`. Neither input is modified.
pub fn concat(a: &Value, b: &Value) -> Result<Value> {
    let first = as_list(a)?;
    let second = as_list(b)?;
    Ok(Value::List(first.append(&second)))
}

/// Returns a new sequence with `f` applied to every element.
pub fn map(seq: &Value, f: impl Fn(&Value) -> Value) -> Result<Value> {
    let list = as_list(seq)?;
    Ok(Value::List(list.iter().map(f).collect()))
}

/// Returns a new sequence keeping only the elements `pred` accepts.
pub fn filter(seq: &Value, pred: impl Fn(&Value) -> bool) -> Result<Value> {
    let list = as_list(seq)?;
    Ok(Value::List(
        list.iter().filter(|item| pred(item)).cloned().collect(),
    ))
}

/// Default ordering used by [`sorted`].
///
/// Ranks the value's type first, then compares within the type, so the
/// order stays transitive across mixed-type input. `f64::total_cmp`
/// keeps the numeric branch total even with NaN.
fn default_compare(a: &Value, b: &Value) -> Ordering {
    type_rank(a).cmp(&type_rank(b)).then_with(|| match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            // Containers of equal rank order by their printed form.
            _ => a.to_string().cmp(&b.to_string()),
        },
    })
}

/// Grouping order for [`default_compare`]: numbers share a rank so ints
/// and floats interleave numerically.
const fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Nil => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
        Value::List(_) => 4,
        Value::Set(_) => 5,
        Value::Map(_) => 6,
    }
}
