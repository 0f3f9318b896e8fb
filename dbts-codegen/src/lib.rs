//! Shared code generation utilities for dbts.
//!
//! This crate provides the language-agnostic pieces used by the TypeScript
//! generator:
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`format`] - Whitespace normalization for generated brace-delimited code

pub mod builder;
pub mod format;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use format::format_typescript;
