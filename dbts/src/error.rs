use dbts_codegen_typescript::RenderError;
use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised while turning a table description into TypeScript.
///
/// Every variant forwards the diagnostic of the stage that failed, so
/// reporting through `miette` shows the spans of the failing input.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] Box<dbts_schema::Error>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] Box<ConfigError>),
}
