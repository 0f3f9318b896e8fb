//! Query parameter interface for list endpoints.

use dbts_core::TsType;
use dbts_schema::TableDescriptor;

use crate::{
    ast::{Interface, InterfaceField},
    options::RenderOptions,
    resolve::ResolvedField,
};

/// Pagination and sorting parameters every query interface starts with.
const PAGINATION: [(&str, &str, &str); 4] = [
    ("page", "number", "Page number"),
    ("pageSize", "number", "Page size"),
    ("sortBy", "string", "Sort field"),
    ("sortOrder", "'asc' | 'desc'", "Sort direction"),
];

/// `<Table>QueryParams`: pagination, then per-column filters.
///
/// Every column gets an equality filter. Strings also get a `Like` filter;
/// numbers and dates get `Min`/`Max` bounds of the same type.
pub(crate) fn query_params(
    table: &TableDescriptor,
    fields: &[ResolvedField<'_>],
    options: &RenderOptions,
) -> Interface {
    let detailed = options.detailed();
    let documented = |property: InterfaceField, doc: String| {
        if detailed { property.doc(doc) } else { property }
    };

    let mut interface = Interface::new(format!("{}QueryParams", table.table_name));
    if detailed {
        interface = interface.doc(format!(
            "Query parameters for listing {} records",
            table.table_name
        ));
    }

    for (name, ty, doc) in PAGINATION {
        interface = interface.field_with(documented(
            InterfaceField::new(name, ty).optional(),
            doc.to_string(),
        ));
    }

    for field in fields {
        let column = &field.column.name;
        interface = interface.field_with(documented(
            InterfaceField::new(field.key(""), &field.ty).optional(),
            format!("Filter by {}", column),
        ));

        if field.is(TsType::String) {
            interface = interface.field_with(documented(
                InterfaceField::new(field.key("Like"), "string").optional(),
                format!("Fuzzy match on {}", column),
            ));
        }

        if field.is(TsType::Number) || field.is(TsType::Date) {
            interface = interface
                .field_with(documented(
                    InterfaceField::new(field.key("Min"), &field.ty).optional(),
                    format!("Lower bound for {}", column),
                ))
                .field_with(documented(
                    InterfaceField::new(field.key("Max"), &field.ty).optional(),
                    format!("Upper bound for {}", column),
                ));
        }
    }

    interface
}
