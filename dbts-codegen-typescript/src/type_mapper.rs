//! Database type to TypeScript type mapping.
//!
//! Every mapper is total: a type name it does not recognize maps to
//! [`TsType::Any`].

use dbts_core::{Dialect, TsType};

/// Trait for mapping database column types to TypeScript types.
///
/// Implement this trait to teach the generator about another database's
/// type names.
pub trait TypeMapper: Send + Sync {
    /// The dialect whose type names this mapper understands
    fn dialect(&self) -> Dialect;

    /// Map a database type name (case-insensitive) to a TypeScript type
    fn map_type(&self, source_type: &str) -> TsType;
}

/// Map a database type keyword using the dialect-neutral table.
///
/// ```
/// use dbts_codegen_typescript::map_type;
/// use dbts_core::TsType;
///
/// assert_eq!(map_type("VARCHAR"), TsType::String);
/// assert_eq!(map_type("geometry"), TsType::Any);
/// ```
pub fn map_type(source_type: &str) -> TsType {
    GenericTypeMapper.map_type(source_type)
}

/// Get the mapper for a dialect.
pub fn mapper_for(dialect: Dialect) -> Box<dyn TypeMapper> {
    match dialect {
        Dialect::Generic => Box::new(GenericTypeMapper),
        Dialect::MySql => Box::new(MySqlTypeMapper),
        Dialect::Postgres => Box::new(PostgresTypeMapper),
        Dialect::Sqlite => Box::new(SqliteTypeMapper),
    }
}

/// Dialect-neutral keyword table.
///
/// The whole input is matched after lowercasing, so parameterized names such
/// as `varchar(255)` are not recognized here; use a dialect mapper for those.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericTypeMapper;

impl TypeMapper for GenericTypeMapper {
    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }

    fn map_type(&self, source_type: &str) -> TsType {
        match source_type.to_lowercase().as_str() {
            "int" | "integer" | "bigint" | "smallint" | "tinyint" | "mediumint" => TsType::Number,
            "float" | "double" | "decimal" | "numeric" | "real" => TsType::Number,
            "varchar" | "char" | "text" | "longtext" | "mediumtext" | "tinytext" | "nvarchar"
            | "nchar" => TsType::String,
            "datetime" | "timestamp" | "date" | "time" => TsType::Date,
            "year" => TsType::Number,
            "boolean" | "bool" | "bit" => TsType::Boolean,
            // Structured, binary and spatial types have no faithful TS type
            "json" | "jsonb" | "blob" | "longblob" | "mediumblob" | "tinyblob" | "binary"
            | "varbinary" | "geometry" | "point" | "linestring" | "polygon" | "multipoint"
            | "multilinestring" | "multipolygon" | "geometrycollection" => TsType::Any,
            _ => TsType::Any,
        }
    }
}

/// MySQL / MariaDB column types.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlTypeMapper;

impl TypeMapper for MySqlTypeMapper {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn map_type(&self, source_type: &str) -> TsType {
        let lowered = source_type.trim().to_lowercase();
        // tinyint(1) is MySQL's boolean
        if base_with_length(&lowered) == "tinyint(1)" {
            return TsType::Boolean;
        }

        match base_type(&lowered) {
            "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint" | "year" => {
                TsType::Number
            }
            "float" | "double" | "decimal" | "numeric" | "real" => TsType::Number,
            "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum"
            | "set" => TsType::String,
            "date" | "datetime" | "timestamp" => TsType::Date,
            "time" => TsType::String,
            "bit" | "bool" | "boolean" => TsType::Boolean,
            _ => TsType::Any,
        }
    }
}

/// PostgreSQL column types, including multi-word names.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresTypeMapper;

impl TypeMapper for PostgresTypeMapper {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn map_type(&self, source_type: &str) -> TsType {
        match strip_modifiers(&source_type.to_lowercase()).as_str() {
            "smallint" | "integer" | "int" | "int2" | "int4" | "int8" | "bigint" | "decimal"
            | "numeric" | "real" | "float4" | "float8" | "double precision" | "smallserial"
            | "serial" | "bigserial" => TsType::Number,
            "varchar" | "character varying" | "character" | "char" | "bpchar" | "text"
            | "citext" | "uuid" | "inet" | "cidr" | "macaddr" | "interval" => TsType::String,
            "time" | "timetz" | "time with time zone" | "time without time zone" => {
                TsType::String
            }
            "timestamp" | "timestamptz" | "timestamp with time zone"
            | "timestamp without time zone" | "date" => TsType::Date,
            "boolean" | "bool" => TsType::Boolean,
            _ => TsType::Any,
        }
    }
}

/// SQLite declared types.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteTypeMapper;

impl TypeMapper for SqliteTypeMapper {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn map_type(&self, source_type: &str) -> TsType {
        let lowered = source_type.trim().to_lowercase();
        if base_with_length(&lowered) == "tinyint(1)" {
            return TsType::Boolean;
        }
        if matches!(
            strip_modifiers(&lowered).as_str(),
            "varying character" | "native character"
        ) {
            return TsType::String;
        }

        match base_type(&lowered) {
            "integer" | "int" | "tinyint" | "smallint" | "mediumint" | "bigint" => TsType::Number,
            "real" | "double" | "float" | "numeric" | "decimal" => TsType::Number,
            "text" | "char" | "varchar" | "nchar" | "nvarchar" | "clob" => TsType::String,
            "date" | "datetime" | "timestamp" => TsType::Date,
            "boolean" => TsType::Boolean,
            _ => TsType::Any,
        }
    }
}

/// The type keyword before any length or modifier (`varchar(255)` -> `varchar`).
fn base_type(lowered: &str) -> &str {
    lowered.split(['(', ' ']).next().unwrap_or(lowered)
}

/// The type keyword with its length but without trailing modifiers
/// (`tinyint(1) unsigned` -> `tinyint(1)`).
fn base_with_length(lowered: &str) -> &str {
    lowered.split(' ').next().unwrap_or(lowered)
}

/// Remove parenthesized lengths and normalize whitespace
/// (`timestamp(3)  with time zone` -> `timestamp with time zone`).
fn strip_modifiers(lowered: &str) -> String {
    let mut result = String::with_capacity(lowered.len());
    let mut depth = 0usize;
    for c in lowered.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC_TABLE: &[(&str, TsType)] = &[
        ("int", TsType::Number),
        ("integer", TsType::Number),
        ("bigint", TsType::Number),
        ("smallint", TsType::Number),
        ("tinyint", TsType::Number),
        ("mediumint", TsType::Number),
        ("float", TsType::Number),
        ("double", TsType::Number),
        ("decimal", TsType::Number),
        ("numeric", TsType::Number),
        ("real", TsType::Number),
        ("varchar", TsType::String),
        ("char", TsType::String),
        ("text", TsType::String),
        ("longtext", TsType::String),
        ("mediumtext", TsType::String),
        ("tinytext", TsType::String),
        ("nvarchar", TsType::String),
        ("nchar", TsType::String),
        ("datetime", TsType::Date),
        ("timestamp", TsType::Date),
        ("date", TsType::Date),
        ("time", TsType::Date),
        ("year", TsType::Number),
        ("boolean", TsType::Boolean),
        ("bool", TsType::Boolean),
        ("bit", TsType::Boolean),
        ("json", TsType::Any),
        ("jsonb", TsType::Any),
        ("blob", TsType::Any),
        ("longblob", TsType::Any),
        ("varbinary", TsType::Any),
        ("geometrycollection", TsType::Any),
    ];

    #[test]
    fn test_generic_table() {
        for (keyword, expected) in GENERIC_TABLE {
            assert_eq!(map_type(keyword), *expected, "keyword {keyword}");
        }
    }

    #[test]
    fn test_generic_case_insensitive() {
        for (keyword, expected) in GENERIC_TABLE {
            assert_eq!(map_type(&keyword.to_uppercase()), *expected);
        }
        assert_eq!(map_type("VarChar"), TsType::String);
        assert_eq!(map_type("DateTime"), TsType::Date);
    }

    #[test]
    fn test_generic_unknown_is_any() {
        for keyword in ["", "uuid", "varchar(255)", " int", "money", "🦀"] {
            assert_eq!(map_type(keyword), TsType::Any, "keyword {keyword:?}");
        }
    }

    #[test]
    fn test_mysql_mapper() {
        let mapper = MySqlTypeMapper;
        assert_eq!(mapper.map_type("varchar(255)"), TsType::String);
        assert_eq!(mapper.map_type("INT UNSIGNED"), TsType::Number);
        assert_eq!(mapper.map_type("tinyint(1)"), TsType::Boolean);
        assert_eq!(mapper.map_type("tinyint(4)"), TsType::Number);
        assert_eq!(mapper.map_type("decimal(10,2)"), TsType::Number);
        assert_eq!(mapper.map_type("enum('a','b')"), TsType::String);
        assert_eq!(mapper.map_type("set"), TsType::String);
        assert_eq!(mapper.map_type("SET('a','b')"), TsType::String);
        assert_eq!(mapper.map_type("time"), TsType::String);
        assert_eq!(mapper.map_type("datetime(6)"), TsType::Date);
        assert_eq!(mapper.map_type("blob"), TsType::Any);
    }

    #[test]
    fn test_postgres_mapper() {
        let mapper = PostgresTypeMapper;
        assert_eq!(mapper.map_type("character varying(64)"), TsType::String);
        assert_eq!(mapper.map_type("double precision"), TsType::Number);
        assert_eq!(mapper.map_type("TIMESTAMP WITH TIME ZONE"), TsType::Date);
        assert_eq!(mapper.map_type("timestamp(3) without time zone"), TsType::Date);
        assert_eq!(mapper.map_type("time with time zone"), TsType::String);
        assert_eq!(mapper.map_type("uuid"), TsType::String);
        assert_eq!(mapper.map_type("bigserial"), TsType::Number);
        assert_eq!(mapper.map_type("jsonb"), TsType::Any);
        assert_eq!(mapper.map_type("bytea"), TsType::Any);
        assert_eq!(mapper.map_type("integer[]"), TsType::Any);
    }

    #[test]
    fn test_sqlite_mapper() {
        let mapper = SqliteTypeMapper;
        assert_eq!(mapper.map_type("INTEGER"), TsType::Number);
        assert_eq!(mapper.map_type("varchar(20)"), TsType::String);
        assert_eq!(mapper.map_type("VARYING CHARACTER(10)"), TsType::String);
        assert_eq!(mapper.map_type("tinyint(1)"), TsType::Boolean);
        assert_eq!(mapper.map_type("datetime"), TsType::Date);
        assert_eq!(mapper.map_type("blob"), TsType::Any);
    }

    #[test]
    fn test_mapper_for() {
        for dialect in [
            Dialect::Generic,
            Dialect::MySql,
            Dialect::Postgres,
            Dialect::Sqlite,
        ] {
            assert_eq!(mapper_for(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn test_strip_modifiers() {
        assert_eq!(strip_modifiers("numeric(10, 2)"), "numeric");
        assert_eq!(
            strip_modifiers("timestamp(3)  with   time zone"),
            "timestamp with time zone"
        );
    }
}
