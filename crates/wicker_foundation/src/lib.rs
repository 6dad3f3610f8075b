//! Core types, values, and persistent collections for wicker.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type all operations work over
//! - [`Type`] - Type descriptors used in error reporting
//! - [`Error`] - Error type for operations on wrongly-shaped values
//! - Persistent collections ([`WkVec`], [`WkSet`], [`WkMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{WkMap, WkSet, WkVec};
pub use error::{Error, Result};
pub use types::Type;
pub use value::Value;
