use serde::{Deserialize, Serialize};

use crate::serde_helpers::{optional_scalar_to_string, scalar_to_string};

/// Metadata of a single table column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Column name as declared in the database.
    #[serde(deserialize_with = "scalar_to_string")]
    pub name: String,

    /// Database type keyword (e.g. `varchar`, `int`), matched case-insensitively.
    #[serde(rename = "type", alias = "sourceType", default)]
    pub source_type: String,

    /// Pre-resolved TypeScript type, used verbatim instead of the type mapping.
    #[serde(
        default,
        deserialize_with = "optional_scalar_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ts_type: Option<String>,

    #[serde(default)]
    pub is_primary: bool,

    #[serde(default)]
    pub is_nullable: bool,

    #[serde(
        default,
        deserialize_with = "optional_scalar_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_scalar_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            ts_type: None,
            is_primary: false,
            is_nullable: false,
            comment: None,
            default_value: None,
        }
    }

    /// Mark the column as part of the primary key.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Use `ts_type` verbatim instead of mapping the source type.
    pub fn ts_type(mut self, ts_type: impl Into<String>) -> Self {
        self.ts_type = Some(ts_type.into());
        self
    }
}
