use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for table intake (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the JSON text and its display name together so every error can
/// point back into the input.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Locate the first occurrence of a quoted JSON key.
    pub fn find_key(&self, key: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", key);
        self.src
            .find(&quoted)
            .map(|pos| SourceSpan::from((pos, quoted.len())))
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn not_an_object(&self, found: &'static str) -> Box<Error> {
        Box::new(Error::NotAnObject {
            src: self.named_source(),
            found,
        })
    }

    pub fn missing_table_name(&self) -> Box<Error> {
        Box::new(Error::MissingTableName {
            src: self.named_source(),
            span: self.find_key("tableName"),
        })
    }

    pub fn fields_not_sequence(&self, found: &'static str) -> Box<Error> {
        Box::new(Error::FieldsNotSequence {
            src: self.named_source(),
            span: self.find_key("fields").or_else(|| self.find_key("columns")),
            found,
        })
    }

    pub fn invalid_field(&self, index: usize, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidField {
            src: self.named_source(),
            index,
            message: message.into(),
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse table descriptor")]
    #[diagnostic(code(dbts::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("table descriptor must be a JSON object, found {found}")]
    #[diagnostic(code(dbts::not_an_object))]
    NotAnObject {
        #[source_code]
        src: NamedSource<String>,
        found: &'static str,
    },

    #[error("table descriptor has no table name")]
    #[diagnostic(
        code(dbts::missing_table_name),
        help("add a non-empty \"tableName\" string, e.g. \"tableName\": \"User\"")
    )]
    MissingTableName {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a non-empty string")]
        span: Option<SourceSpan>,
    },

    #[error("\"fields\" must be an array of columns, found {found}")]
    #[diagnostic(
        code(dbts::fields_not_sequence),
        help("list the columns in order, e.g. \"fields\": [{{ \"name\": \"id\", \"type\": \"int\" }}]")
    )]
    FieldsNotSequence {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected an array")]
        span: Option<SourceSpan>,
        found: &'static str,
    },

    #[error("invalid field #{index}: {message}")]
    #[diagnostic(code(dbts::invalid_field))]
    InvalidField {
        #[source_code]
        src: NamedSource<String>,
        index: usize,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(dbts::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Convert a 1-based line and column into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 9, 9), Some(src.len()));
    }

    #[test]
    fn test_find_key() {
        let ctx = SourceContext::new(r#"{ "tableName": "" }"#, "user.json");
        assert_eq!(ctx.find_key("tableName"), Some(SourceSpan::from((2, 11))));
        assert_eq!(ctx.find_key("fields"), None);
    }
}
