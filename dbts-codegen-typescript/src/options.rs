//! Rendering options.

use dbts_core::Dialect;
use serde::{Deserialize, Serialize};

/// How much documentation the generated declarations carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStyle {
    /// Only column and table comments.
    #[default]
    Minimal,
    /// Comments plus type, key, nullability and default annotations.
    Detailed,
}

/// Options controlling which declarations are generated and how.
///
/// Every section is enabled by default; property names are camelCased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Emit the file header block comment.
    #[serde(alias = "includeHeaderComment")]
    pub include_header_comment: bool,

    /// Emit import hint comments for `Date` fields.
    #[serde(alias = "includeImportHints")]
    pub include_import_hints: bool,

    /// Emit `Create<Table>Dto`.
    #[serde(alias = "emitCreateDto")]
    pub emit_create_dto: bool,

    /// Emit `Update<Table>Dto`.
    #[serde(alias = "emitUpdateDto")]
    pub emit_update_dto: bool,

    /// Emit `<Table>QueryParams`.
    #[serde(alias = "emitQueryParams")]
    pub emit_query_params: bool,

    /// Use column names as property names instead of camelCasing them.
    #[serde(alias = "useRawFieldNames")]
    pub use_raw_field_names: bool,

    #[serde(alias = "docStyle")]
    pub doc_style: DocStyle,

    /// Dialect used to interpret column type names.
    pub dialect: Dialect,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_header_comment: true,
            include_import_hints: true,
            emit_create_dto: true,
            emit_update_dto: true,
            emit_query_params: true,
            use_raw_field_names: false,
            doc_style: DocStyle::Minimal,
            dialect: Dialect::Generic,
        }
    }
}

impl RenderOptions {
    /// Only the entity interface: no header, hints, DTOs or query params.
    pub fn interface_only() -> Self {
        Self {
            include_header_comment: false,
            include_import_hints: false,
            emit_create_dto: false,
            emit_update_dto: false,
            emit_query_params: false,
            ..Self::default()
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_doc_style(mut self, doc_style: DocStyle) -> Self {
        self.doc_style = doc_style;
        self
    }

    /// Keep column names as property names.
    pub fn raw_field_names(mut self) -> Self {
        self.use_raw_field_names = true;
        self
    }

    pub(crate) fn detailed(&self) -> bool {
        self.doc_style == DocStyle::Detailed
    }
}
