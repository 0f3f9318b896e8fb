//! File header block comment.

use chrono::{DateTime, Utc};
use dbts_codegen::{CodeFragment, Renderable};
use dbts_schema::TableDescriptor;

use crate::ast::DocComment;

pub(crate) struct FileHeader<'a> {
    pub table: &'a TableDescriptor,
    pub generated_at: DateTime<Utc>,
    /// List indexes and foreign keys as well.
    pub detailed: bool,
}

impl FileHeader<'_> {
    fn comment(&self) -> DocComment {
        let table = self.table;
        let primary_keys: Vec<&str> = table.primary_keys().map(|f| f.name.as_str()).collect();
        let primary_keys = if primary_keys.is_empty() {
            "(none)".to_string()
        } else {
            primary_keys.join(", ")
        };

        let mut doc = DocComment::new().line(format!(
            "TypeScript definitions for the {} table",
            table.table_name
        ));
        if let Some(comment) = &table.comment {
            doc = doc.line(comment.as_str());
        }
        doc = doc
            .blank()
            .line(format!("Table: {}", table.table_name))
            .line(format!("Fields: {}", table.fields.len()))
            .line(format!("Primary keys: {}", primary_keys));

        if self.detailed {
            doc = doc.lines(table.indexes.iter().map(|index| {
                let kind = if index.is_unique { "Unique index" } else { "Index" };
                format!("{}: {} ({})", kind, index.name, index.columns.join(", "))
            }));
            doc = doc.lines(table.foreign_keys.iter().map(|fk| {
                format!(
                    "Foreign key: {} ({}) -> {} ({})",
                    fk.name,
                    fk.columns.join(", "),
                    fk.ref_table,
                    fk.ref_columns.join(", ")
                )
            }));
        }

        doc.line(format!(
            "Generated at: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ))
        .blank()
        .line("Generated file, do not edit by hand.")
    }
}

impl Renderable for FileHeader<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.comment().to_fragments()
    }
}
