//! Core types and utilities for dbts.
//!
//! This crate provides the fundamental types shared across the dbts
//! workspace: the closed set of generated TypeScript types, the database
//! dialect selector and the identifier case helpers.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod types;
mod utils;

// Fundamental types
pub use types::{Dialect, ParseDialectError, TsType};
// String utilities
pub use utils::{is_identifier, is_reserved_word, to_camel_case};
