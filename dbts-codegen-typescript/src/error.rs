use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised when a table descriptor cannot be rendered.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum RenderError {
    #[error("table name must not be empty")]
    #[diagnostic(code(dbts::empty_table_name))]
    EmptyTableName,

    #[error("table name '{name}' is not a valid TypeScript identifier")]
    #[diagnostic(
        code(dbts::invalid_table_name),
        help(
            "use letters, digits, '_' and '$', starting with a letter, '_' or '$', \
             and avoid TypeScript reserved words"
        )
    )]
    InvalidTableName { name: String },

    #[error("field #{index} has an empty name")]
    #[diagnostic(code(dbts::empty_field_name))]
    EmptyFieldName { index: usize },
}
