use std::{fmt, str::FromStr};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// TypeScript types a database column can be mapped to.
///
/// The set is closed: anything a mapper does not recognize becomes [`TsType::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsType {
    Number,
    String,
    Boolean,
    Date,
    Any,
}

impl TsType {
    /// Get the TypeScript spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TsType::Number => "number",
            TsType::String => "string",
            TsType::Boolean => "boolean",
            TsType::Date => "Date",
            TsType::Any => "any",
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database dialect whose type names should be understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Dialect-neutral keyword table.
    #[default]
    Generic,
    MySql,
    #[serde(alias = "postgresql")]
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dialect name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown dialect '{name}'")]
#[diagnostic(
    code(dbts::unknown_dialect),
    help("expected one of: generic, mysql, postgres, sqlite")
)]
pub struct ParseDialectError {
    pub name: String,
}

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(Dialect::Generic),
            "mysql" => Ok(Dialect::MySql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::Sqlite),
            _ => Err(ParseDialectError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_type_as_str() {
        assert_eq!(TsType::Number.as_str(), "number");
        assert_eq!(TsType::String.as_str(), "string");
        assert_eq!(TsType::Boolean.as_str(), "boolean");
        assert_eq!(TsType::Date.as_str(), "Date");
        assert_eq!(TsType::Any.to_string(), "any");
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("MySQL".parse::<Dialect>(), Ok(Dialect::MySql));
        assert_eq!("PostgreSQL".parse::<Dialect>(), Ok(Dialect::Postgres));
        assert_eq!("sqlite".parse::<Dialect>(), Ok(Dialect::Sqlite));
        assert_eq!(
            "Oracle".parse::<Dialect>(),
            Err(ParseDialectError {
                name: "Oracle".to_string()
            })
        );
    }

    #[test]
    fn test_parse_dialect_error_diagnostic() {
        let err = "db2".parse::<Dialect>().unwrap_err();
        assert_eq!(err.to_string(), "unknown dialect 'db2'");
        let code = err.code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("dbts::unknown_dialect"));
    }

    #[test]
    fn test_dialect_deserialize() {
        let dialect: Dialect = serde_json::from_str("\"postgresql\"").unwrap();
        assert_eq!(dialect, Dialect::Postgres);
        let dialect: Dialect = serde_json::from_str("\"mysql\"").unwrap();
        assert_eq!(dialect, Dialect::MySql);
        assert_eq!(Dialect::default(), Dialect::Generic);
    }
}
