//! Per-column resolution shared by every section.

use dbts_core::TsType;
use dbts_schema::{ColumnDescriptor, TableDescriptor};

use crate::{
    naming::{property_key, property_name},
    options::RenderOptions,
    type_mapper::TypeMapper,
};

/// A column with its property name and TypeScript type decided.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedField<'a> {
    pub column: &'a ColumnDescriptor,
    /// Unquoted property name (camelCased unless raw names are requested).
    pub property: String,
    /// TypeScript type: the mapped type or the column's verbatim override.
    pub ty: String,
}

impl ResolvedField<'_> {
    /// Property key with an optional suffix (`createdAt` + `Min`).
    pub fn key(&self, suffix: &str) -> String {
        property_key(&format!("{}{}", self.property, suffix))
    }

    pub fn is(&self, ty: TsType) -> bool {
        self.ty == ty.as_str()
    }

    /// Types whose name mentions a date or time need a `Date` import hint.
    pub fn needs_date_import(&self) -> bool {
        let lowered = self.ty.to_lowercase();
        lowered.contains("date") || lowered.contains("time")
    }
}

pub(crate) fn resolve_fields<'a>(
    table: &'a TableDescriptor,
    options: &RenderOptions,
    mapper: &dyn TypeMapper,
) -> Vec<ResolvedField<'a>> {
    table
        .fields
        .iter()
        .map(|column| {
            let ty = match &column.ts_type {
                Some(ty) => ty.clone(),
                None => mapper.map_type(&column.source_type).as_str().to_string(),
            };
            let property = property_name(&column.name, options.use_raw_field_names);
            tracing::trace!(
                column = %column.name,
                source_type = %column.source_type,
                property = %property,
                ty = %ty,
                "resolved column"
            );
            ResolvedField {
                column,
                property,
                ty,
            }
        })
        .collect()
}
