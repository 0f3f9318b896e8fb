use dbts_codegen_typescript::RenderOptions;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Generator configuration.
///
/// ```toml
/// format = true
///
/// [render]
/// doc_style = "detailed"
/// dialect = "postgres"
/// emit_query_params = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Options passed to the renderer.
    pub render: RenderOptions,

    /// Run the whitespace normalizer over the rendered file.
    pub format: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            format: true,
        }
    }
}

impl Config {
    pub fn new(render: RenderOptions) -> Self {
        Self {
            render,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, Box<ConfigError>> {
        toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError {
                src: NamedSource::new("dbts.toml", content.to_string()),
                span,
                source,
            })
        })
    }
}

/// A configuration that could not be parsed.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse configuration")]
#[diagnostic(
    code(dbts::config_error),
    help("known keys are 'format' and the options of the [render] table")
)]
pub struct ConfigError {
    #[source_code]
    src: NamedSource<String>,
    #[label("invalid configuration here")]
    span: Option<SourceSpan>,
    #[source]
    source: toml::de::Error,
}

impl ConfigError {
    /// Byte range of the offending TOML, when known.
    pub fn span(&self) -> Option<SourceSpan> {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use dbts_codegen_typescript::DocStyle;
    use dbts_core::Dialect;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
        assert!(Config::default().format);
    }

    #[test]
    fn test_render_table() {
        let config = Config::from_toml_str(
            r#"
format = false

[render]
doc_style = "detailed"
dialect = "postgresql"
emit_query_params = false
"#,
        )
        .unwrap();

        assert!(!config.format);
        assert_eq!(config.render.doc_style, DocStyle::Detailed);
        assert_eq!(config.render.dialect, Dialect::Postgres);
        assert!(!config.render.emit_query_params);
        assert!(config.render.emit_create_dto);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let content = "colour = true\n";
        let err = Config::from_toml_str(content).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse configuration");
        assert!(err.span().is_some());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(Config::from_toml_str("format = \"yes\"\n").is_err());
        assert!(Config::from_toml_str("[render]\ndoc_style = \"verbose\"\n").is_err());
    }
}
