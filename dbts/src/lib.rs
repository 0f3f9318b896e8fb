//! Generate TypeScript declarations from database table descriptions.
//!
//! `dbts` reads the JSON description of one table and produces an entity
//! interface, create and update DTOs and a query parameter interface:
//!
//! ```
//! let json = r#"{
//!     "tableName": "User",
//!     "fields": [
//!         { "name": "id", "type": "int", "isPrimary": true },
//!         { "name": "created_at", "type": "datetime", "isNullable": true }
//!     ]
//! }"#;
//!
//! let code = dbts::generate(json, &dbts::Config::default()).unwrap();
//! assert!(code.contains("export interface User {\n  id: number;\n  createdAt?: Date;\n}"));
//! assert!(code.contains("export interface CreateUserDto {"));
//! assert!(code.contains("  createdAtMin?: Date;"));
//! ```
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`schema`] for descriptors and JSON intake, [`typescript`] for the
//! renderer and type mappers, [`codegen`] for the code builder and
//! formatter.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use dbts_codegen as codegen;
pub use dbts_codegen_typescript as typescript;
pub use dbts_core::{Dialect, TsType, to_camel_case};
pub use dbts_schema as schema;
pub use dbts_schema::{ColumnDescriptor, TableDescriptor};
pub use error::{Error, Result};

use dbts_codegen::format_typescript;
use dbts_codegen_typescript::InterfaceRenderer;

/// Name reported in diagnostics for JSON passed to [`generate`].
const DEFAULT_SOURCE_NAME: &str = "table.json";

/// Generate TypeScript from a JSON table description.
pub fn generate(json: &str, config: &Config) -> Result<String> {
    generate_named(json, DEFAULT_SOURCE_NAME, config)
}

/// Like [`generate`], naming the JSON source `filename` in diagnostics.
pub fn generate_named(json: &str, filename: &str, config: &Config) -> Result<String> {
    let table = dbts_schema::parse_table(json, filename)?;
    generate_table(&table, config)
}

/// Generate TypeScript from an already built table descriptor.
pub fn generate_table(table: &TableDescriptor, config: &Config) -> Result<String> {
    let code = InterfaceRenderer::new(config.render.clone()).render(table)?;
    if !config.format {
        return Ok(code);
    }
    tracing::debug!(table = %table.table_name, "formatting generated code");
    Ok(format_typescript(&code))
}
