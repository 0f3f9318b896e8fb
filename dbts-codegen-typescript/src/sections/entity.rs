//! The main entity interface.

use dbts_schema::TableDescriptor;

use crate::{
    ast::{Interface, InterfaceField},
    options::RenderOptions,
    resolve::ResolvedField,
};

/// `export interface <Table>` with one property per column.
pub(crate) fn entity_interface(
    table: &TableDescriptor,
    fields: &[ResolvedField<'_>],
    options: &RenderOptions,
) -> Interface {
    let mut interface = Interface::new(&table.table_name);
    if options.detailed() {
        interface = interface.doc(format!("{} entity", table.table_name));
    }
    if let Some(comment) = &table.comment {
        interface = interface.doc(comment);
    }

    fields
        .iter()
        .fold(interface, |interface, field| {
            interface.field_with(property(field, options))
        })
}

fn property(field: &ResolvedField<'_>, options: &RenderOptions) -> InterfaceField {
    let column = field.column;
    let mut property =
        InterfaceField::new(field.key(""), &field.ty).optional_if(column.is_nullable);

    if let Some(comment) = &column.comment {
        property = property.doc(comment);
    }

    if options.detailed() {
        property = if column.source_type.is_empty() {
            property.doc(format!("Type: {}", field.ty))
        } else {
            property.doc(format!("Type: {} -> {}", column.source_type, field.ty))
        };
        if column.is_primary {
            property = property.doc("Primary key");
        }
        if column.is_nullable {
            property = property.doc("Nullable");
        }
        if let Some(default) = &column.default_value {
            property = property.doc(format!("Default: {}", default));
        }
    }

    property
}
