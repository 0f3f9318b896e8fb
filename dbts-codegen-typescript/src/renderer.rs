//! Table descriptor to TypeScript rendering.

use chrono::{DateTime, Utc};
use dbts_core::{is_identifier, is_reserved_word};
use dbts_schema::TableDescriptor;

use crate::{
    code_file::CodeFile,
    error::{RenderError, Result},
    options::RenderOptions,
    resolve::resolve_fields,
    sections::{
        FileHeader, ImportHints, create_dto, entity_interface, query_params, update_dto,
    },
    type_mapper::{TypeMapper, mapper_for},
};

/// Renders table descriptors into TypeScript declarations.
///
/// The renderer holds no mutable state; one instance can serve any number
/// of tables, from any number of threads.
///
/// # Example
///
/// ```
/// use dbts_codegen_typescript::{InterfaceRenderer, RenderOptions};
/// use dbts_schema::{ColumnDescriptor, TableDescriptor};
///
/// let table = TableDescriptor::new("User")
///     .field(ColumnDescriptor::new("id", "int").primary())
///     .field(ColumnDescriptor::new("created_at", "datetime").nullable());
///
/// let code = InterfaceRenderer::new(RenderOptions::interface_only())
///     .render(&table)
///     .unwrap();
///
/// assert_eq!(
///     code,
///     "export interface User {\n  id: number;\n  createdAt?: Date;\n}\n"
/// );
/// ```
pub struct InterfaceRenderer {
    options: RenderOptions,
    mapper: Box<dyn TypeMapper>,
}

impl InterfaceRenderer {
    /// Create a renderer using the mapper of `options.dialect`.
    pub fn new(options: RenderOptions) -> Self {
        let mapper = mapper_for(options.dialect);
        Self { options, mapper }
    }

    /// Create a renderer with a custom type mapper.
    pub fn with_mapper(options: RenderOptions, mapper: Box<dyn TypeMapper>) -> Self {
        Self { options, mapper }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `table`, stamping the header with the current time.
    pub fn render(&self, table: &TableDescriptor) -> Result<String> {
        self.render_at(table, Utc::now())
    }

    /// Render `table` with a fixed header timestamp.
    pub fn render_at(&self, table: &TableDescriptor, generated_at: DateTime<Utc>) -> Result<String> {
        validate(table)?;

        let options = &self.options;
        let fields = resolve_fields(table, options, self.mapper.as_ref());

        tracing::debug!(
            table = %table.table_name,
            fields = fields.len(),
            dialect = %self.mapper.dialect(),
            "rendering table"
        );

        let mut file = CodeFile::new();
        if options.include_header_comment {
            file = file.add(FileHeader {
                table,
                generated_at,
                detailed: options.detailed(),
            });
        }
        if options.include_import_hints {
            file = file.add_opt(ImportHints::collect(&fields));
        }
        file = file.add(entity_interface(table, &fields, options));
        if options.emit_create_dto {
            file = file.add(create_dto(table, &fields, options));
        }
        if options.emit_update_dto {
            file = file.add(update_dto(table, &fields, options));
        }
        if options.emit_query_params {
            file = file.add(query_params(table, &fields, options));
        }

        Ok(file.render())
    }
}

impl Default for InterfaceRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Render `table` with `options`.
pub fn render(table: &TableDescriptor, options: &RenderOptions) -> Result<String> {
    InterfaceRenderer::new(options.clone()).render(table)
}

fn validate(table: &TableDescriptor) -> Result<()> {
    let name = table.table_name.trim();
    if name.is_empty() {
        return Err(RenderError::EmptyTableName);
    }
    if !is_identifier(&table.table_name) || is_reserved_word(&table.table_name) {
        return Err(RenderError::InvalidTableName {
            name: table.table_name.clone(),
        });
    }
    if let Some(index) = table.fields.iter().position(|f| f.name.trim().is_empty()) {
        return Err(RenderError::EmptyFieldName { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dbts_schema::ColumnDescriptor;

    use super::*;

    #[test]
    fn test_empty_table_name() {
        let err = render(&TableDescriptor::new(""), &RenderOptions::default()).unwrap_err();
        assert_eq!(err, RenderError::EmptyTableName);
        let err = render(&TableDescriptor::new("  "), &RenderOptions::default()).unwrap_err();
        assert_eq!(err, RenderError::EmptyTableName);
    }

    #[test]
    fn test_invalid_table_name() {
        let err = render(&TableDescriptor::new("user-profile"), &RenderOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidTableName {
                name: "user-profile".to_string()
            }
        );
    }

    #[test]
    fn test_reserved_table_name() {
        for name in ["class", "interface", "string"] {
            let err = render(&TableDescriptor::new(name), &RenderOptions::default()).unwrap_err();
            assert_eq!(
                err,
                RenderError::InvalidTableName {
                    name: name.to_string()
                }
            );
        }
        assert!(render(&TableDescriptor::new("Class"), &RenderOptions::default()).is_ok());
    }

    #[test]
    fn test_empty_field_name() {
        let table = TableDescriptor::new("T")
            .field(ColumnDescriptor::new("id", "int"))
            .field(ColumnDescriptor::new("", "int"));
        let err = render(&table, &RenderOptions::default()).unwrap_err();
        assert_eq!(err, RenderError::EmptyFieldName { index: 1 });
    }

    #[test]
    fn test_renderer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InterfaceRenderer>();
    }
}
