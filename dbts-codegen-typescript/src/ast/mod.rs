//! TypeScript AST builders for the declarations dbts emits.
//!
//! These provide a small high-level API for constructing TypeScript syntax,
//! which is then rendered via CodeBuilder.

mod comment;
mod interface;

pub use comment::{DocComment, LineComments};
pub use interface::{Interface, InterfaceField};
