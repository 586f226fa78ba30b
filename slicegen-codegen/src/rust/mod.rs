//! Rust item emitters for the generated collection types.

pub mod accessors;
pub mod base;
pub mod constructors;
