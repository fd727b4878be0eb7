//! Prelude module for the age_calculator crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
