//! Prelude module for iso_week_gen crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::Display;
