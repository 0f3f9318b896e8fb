//! Table descriptors and JSON intake for dbts.
//!
//! A [`TableDescriptor`] is the single input of the generator. It can be
//! built in code or parsed from the JSON shape produced by schema
//! introspection tools:
//!
//! ```json
//! {
//!   "tableName": "User",
//!   "comment": "Registered users",
//!   "fields": [
//!     { "name": "id", "type": "int", "isPrimary": true },
//!     { "name": "created_at", "type": "datetime", "isNullable": true }
//!   ]
//! }
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod column;
mod error;
mod parse;
mod serde_helpers;
mod table;

pub use column::ColumnDescriptor;
pub use error::{Error, Result, SourceContext};
pub use parse::{parse_table, parse_value};
pub use table::{ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};
