//! End-to-end generation from JSON table descriptions.

use dbts::{Config, Error, generate, generate_named};
use dbts_codegen_typescript::RenderError;
use miette::Diagnostic;

const ARTICLE: &str = r#"{
  "tableName": "Article",
  "comment": "Blog articles",
  "fields": [
    { "name": "id", "type": "bigint", "isPrimary": true },
    { "name": "title", "type": "varchar(200)", "comment": "Headline" },
    { "name": "published", "type": "tinyint(1)", "defaultValue": 0 },
    { "name": "published_at", "type": "datetime", "isNullable": true }
  ]
}"#;

fn mysql_config() -> Config {
    Config::from_toml_str(
        r#"
[render]
include_header_comment = false
dialect = "mysql"
"#,
    )
    .unwrap()
}

#[test]
fn test_generate_article() {
    let code = generate(ARTICLE, &mysql_config()).unwrap();
    insta::assert_snapshot!(code, @r"
// Type imports
// import { Date } from './types';

/** Blog articles */
export interface Article {
  id: number;
  /** Headline */
  title: string;
  published: boolean;
  publishedAt?: Date;
}

export interface CreateArticleDto {
  /** Headline */
  title: string;
  published: boolean;
  publishedAt?: Date;
}

export interface UpdateArticleDto {
  /** Headline */
  title?: string;
  published?: boolean;
  publishedAt?: Date;
}

export interface ArticleQueryParams {
  page?: number;
  pageSize?: number;
  sortBy?: string;
  sortOrder?: 'asc' | 'desc';
  id?: number;
  idMin?: number;
  idMax?: number;
  title?: string;
  titleLike?: string;
  published?: boolean;
  publishedAt?: Date;
  publishedAtMin?: Date;
  publishedAtMax?: Date;
}
");
}

#[test]
fn test_format_switch_does_not_change_output() {
    let formatted = generate(ARTICLE, &mysql_config()).unwrap();
    let raw = generate(
        ARTICLE,
        &Config {
            format: false,
            ..mysql_config()
        },
    )
    .unwrap();
    assert_eq!(formatted, raw);
    assert!(formatted.ends_with("}\n"));
    assert!(!formatted.ends_with("\n\n"));
}

#[test]
fn test_default_config_includes_header() {
    let code = generate(ARTICLE, &Config::default()).unwrap();
    assert!(code.starts_with("/**\n * TypeScript definitions for the Article table\n"));
    assert!(code.contains(" * Primary keys: id\n"));
    assert!(code.contains(" * Fields: 4\n"));
    // The generic mapper does not know length suffixes.
    assert!(code.contains("  title: any;\n"));
}

#[test]
fn test_empty_fields() {
    let config = Config::new(dbts_codegen_typescript::RenderOptions::interface_only());
    let code = generate(r#"{ "tableName": "X", "fields": [] }"#, &config).unwrap();
    assert_eq!(code, "export interface X {\n}\n");
}

#[test]
fn test_malformed_json_is_a_schema_error() {
    let err = generate_named("{ \"tableName\": ", "broken.json", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
    assert!(err.source_code().is_some());
}

#[test]
fn test_non_object_is_a_schema_error() {
    let err = generate("[]", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
}

#[test]
fn test_invalid_table_name_is_a_render_error() {
    let json = r#"{ "tableName": "user-profile", "fields": [] }"#;
    let err = generate(json, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Render(RenderError::InvalidTableName { ref name }) if name == "user-profile"
    ));
    let code = err.code().map(|code| code.to_string());
    assert_eq!(code.as_deref(), Some("dbts::invalid_table_name"));
}

#[test]
fn test_config_error_converts() {
    let err: Error = Config::from_toml_str("[render]\nunknown = 1\n")
        .unwrap_err()
        .into();
    assert!(matches!(err, Error::Config(_)));
    let code = err.code().map(|code| code.to_string());
    assert_eq!(code.as_deref(), Some("dbts::config_error"));
}
