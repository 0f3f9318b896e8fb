//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) turns
//! them into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A single-line JSDoc comment (`/** text */`).
    JsDoc(String),
    /// A multi-line JSDoc comment block.
    DocBlock(Vec<String>),
}

impl CodeFragment {
    /// Create a JSDoc comment from several lines.
    ///
    /// A single line collapses to [`CodeFragment::JsDoc`].
    pub fn doc_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.len() == 1 {
            Self::JsDoc(lines.remove(0))
        } else {
            Self::DocBlock(lines)
        }
    }
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for AST nodes to enable them to be rendered
/// through CodeBuilder without direct coupling.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_lines_collapse() {
        assert_eq!(
            CodeFragment::doc_lines(["only"]),
            CodeFragment::JsDoc("only".to_string())
        );
        assert_eq!(
            CodeFragment::doc_lines(["a", "b"]),
            CodeFragment::DocBlock(vec!["a".to_string(), "b".to_string()])
        );
    }
}
