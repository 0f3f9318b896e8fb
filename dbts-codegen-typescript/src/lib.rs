//! TypeScript interface generator for dbts.
//!
//! Turns a [`TableDescriptor`](dbts_schema::TableDescriptor) into
//! TypeScript declarations:
//!
//! - a file header comment
//! - import hints for `Date` fields
//! - `export interface <Table>` with one property per column
//! - `Create<Table>Dto` and `Update<Table>Dto` payloads
//! - `<Table>QueryParams` with pagination and per-column filters
//!
//! ```
//! use dbts_codegen_typescript::{RenderOptions, render};
//! use dbts_schema::{ColumnDescriptor, TableDescriptor};
//!
//! let table = TableDescriptor::new("Post").field(ColumnDescriptor::new("title", "varchar"));
//! let code = render(&table, &RenderOptions::default()).unwrap();
//! assert!(code.contains("titleLike?: string;"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod code_file;
mod error;
mod naming;
mod options;
mod renderer;
mod resolve;
mod sections;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use error::{RenderError, Result};
pub use naming::{property_key, property_name};
pub use options::{DocStyle, RenderOptions};
pub use renderer::{InterfaceRenderer, render};
pub use type_mapper::{
    GenericTypeMapper, MySqlTypeMapper, PostgresTypeMapper, SqliteTypeMapper, TypeMapper,
    map_type, mapper_for,
};
