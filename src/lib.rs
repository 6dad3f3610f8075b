//! Wicker - persistent collection toolkit
//!
//! This crate re-exports the wicker layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: wicker_tour       — Console walkthrough of the operations
//! Layer 1: wicker_ops        — Non-destructive operations over values
//! Layer 0: wicker_foundation — Core types (Value, Error, persistent collections)
//! ```

pub use wicker_foundation as foundation;
pub use wicker_ops as ops;
