//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fixes these at
//! build time; nothing is stored or changed at runtime.

pub mod types;

pub use types::*;
