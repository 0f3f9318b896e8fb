//! Create and update payload interfaces.
//!
//! Both leave out primary key columns, which the database assigns and
//! which are never rewritten.

use dbts_schema::TableDescriptor;

use crate::{
    ast::{Interface, InterfaceField},
    options::RenderOptions,
    resolve::ResolvedField,
};

/// `Create<Table>Dto`: nullable columns stay optional.
pub(crate) fn create_dto(
    table: &TableDescriptor,
    fields: &[ResolvedField<'_>],
    options: &RenderOptions,
) -> Interface {
    let name = format!("Create{}Dto", table.table_name);
    let doc = format!("Payload for creating {} records", table.table_name);
    dto(name, doc, fields, options, false)
}

/// `Update<Table>Dto`: every property is optional, updates are partial.
pub(crate) fn update_dto(
    table: &TableDescriptor,
    fields: &[ResolvedField<'_>],
    options: &RenderOptions,
) -> Interface {
    let name = format!("Update{}Dto", table.table_name);
    let doc = format!("Payload for updating {} records", table.table_name);
    dto(name, doc, fields, options, true)
}

fn dto(
    name: String,
    doc: String,
    fields: &[ResolvedField<'_>],
    options: &RenderOptions,
    all_optional: bool,
) -> Interface {
    let detailed = options.detailed();
    let interface = if detailed {
        Interface::new(name).doc(doc)
    } else {
        Interface::new(name)
    };

    fields
        .iter()
        .filter(|field| !field.column.is_primary)
        .fold(interface, |interface, field| {
            let column = field.column;
            let property = InterfaceField::new(field.key(""), &field.ty)
                .optional_if(all_optional || column.is_nullable);
            let property = match (&column.comment, detailed) {
                (Some(comment), _) => property.doc(comment),
                (None, true) => property.doc(&column.name),
                (None, false) => property,
            };
            interface.field_with(property)
        })
}
