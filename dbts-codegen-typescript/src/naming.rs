//! Property naming for generated interfaces.

use dbts_core::{is_identifier, to_camel_case};

/// Property name for a column: camelCase, or the column name untouched.
pub fn property_name(column_name: &str, raw: bool) -> String {
    if raw {
        column_name.to_string()
    } else {
        to_camel_case(column_name)
    }
}

/// Render a property key, quoting names that are not bare identifiers.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
