//! Table descriptor parsing from JSON text.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, Result, SourceContext,
    TableDescriptor,
    serde_helpers::{json_kind, optional_scalar_to_string},
};

/// Table-level attributes that are optional in the JSON input.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableExtras {
    #[serde(default, deserialize_with = "optional_scalar_to_string")]
    comment: Option<String>,
    #[serde(default)]
    indexes: Option<Vec<IndexDescriptor>>,
    #[serde(default)]
    foreign_keys: Option<Vec<ForeignKeyDescriptor>>,
}

/// Parse a table descriptor from JSON, using `filename` in error reports.
pub fn parse_table(content: &str, filename: &str) -> Result<TableDescriptor> {
    let ctx = SourceContext::new(content, filename);
    let value: Value = serde_json::from_str(content).map_err(|e| ctx.parse_error(e))?;
    parse_value(value, &ctx)
}

/// Build a table descriptor from an already parsed JSON value.
pub fn parse_value(value: Value, ctx: &SourceContext) -> Result<TableDescriptor> {
    let mut object = match value {
        Value::Object(object) => object,
        other => return Err(ctx.not_an_object(json_kind(&other))),
    };

    let table_name = match object.remove("tableName") {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        None | Some(Value::Null) | Some(Value::String(_)) => {
            return Err(ctx.missing_table_name());
        }
        Some(other) => {
            return Err(ctx.validation_error_at(
                format!("\"tableName\" must be a string, found {}", json_kind(&other)),
                ctx.find_key("tableName"),
            ));
        }
    };

    let fields = match take_fields(&mut object) {
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_column(index, item, ctx))
            .collect::<Result<Vec<_>>>()?,
        Some(other) => return Err(ctx.fields_not_sequence(json_kind(&other))),
        None => return Err(ctx.fields_not_sequence("nothing")),
    };

    let extras = TableExtras::deserialize(Value::Object(object))
        .map_err(|e| ctx.validation_error(e.to_string()))?;

    tracing::debug!(
        table = %table_name,
        fields = fields.len(),
        file = ctx.filename(),
        "parsed table descriptor"
    );

    Ok(TableDescriptor {
        table_name,
        comment: extras.comment,
        fields,
        indexes: extras.indexes.unwrap_or_default(),
        foreign_keys: extras.foreign_keys.unwrap_or_default(),
    })
}

fn take_fields(object: &mut Map<String, Value>) -> Option<Value> {
    object
        .remove("fields")
        .or_else(|| object.remove("columns"))
}

fn parse_column(index: usize, item: Value, ctx: &SourceContext) -> Result<ColumnDescriptor> {
    let column = ColumnDescriptor::deserialize(item)
        .map_err(|e| ctx.invalid_field(index, e.to_string()))?;

    if column.name.trim().is_empty() {
        return Err(ctx.invalid_field(index, "field name must not be empty"));
    }

    Ok(column)
}
