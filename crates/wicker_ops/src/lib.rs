//! Non-destructive collection operations over wicker values.
//!
//! Every operation here takes its inputs by reference and returns a new
//! [`Value`]; inputs are never mutated. Operations are lenient about the
//! edges the library defines: `nil` stands in for the empty sequence
//! wherever a sequence is expected, an absent match is an `Option::None`,
//! and excluding an out-of-range index yields the sequence unchanged.
//! A value of the wrong shape is a [`TypeMismatch`] error.
//!
//! [`TypeMismatch`]: wicker_foundation::Error::TypeMismatch
//!
//! Modules:
//! - [`seq`] - building, reordering, and reshaping sequences
//! - [`query`] - predicate queries (any / all / find)
//! - [`dedup`] - deduplication and sequence intersection
//! - [`copy`] - shallow and deep copying
//! - [`flatten`] - nesting reduction and flat-map
//! - [`convert`] - conversions between collection shapes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod copy;
pub mod dedup;
pub mod flatten;
pub mod query;
pub mod seq;

pub use convert::{entries, to_list, to_set};
pub use copy::{deep_copy, shallow_copy};
pub use dedup::{distinct, intersect};
pub use flatten::{flat_map, flatten, flatten_one};
pub use query::{all, any, contains, find_first, find_last};
pub use seq::{concat, exclude_at, fill_map, filter, map, replace_at, reversed, sorted, sorted_by};

use wicker_foundation::{Error, Result, Type, Value, WkVec};

/// Borrows a value as a list, treating `nil` as the empty list.
pub(crate) fn as_list(value: &Value) -> Result<WkVec<Value>> {
    match value {
        Value::List(v) => Ok(v.clone()),
        Value::Nil => Ok(WkVec::new()),
        other => Err(Error::type_mismatch(
            Type::list(Type::Any),
            other.value_type(),
        )),
    }
}
