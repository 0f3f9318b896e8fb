//! Comment builders.

use dbts_codegen::{CodeFragment, Renderable};

/// A standalone JSDoc block (`/** ... */`).
///
/// Always renders in the multi-line form so file headers stay stable.
#[derive(Debug, Clone, Default)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line; an empty string renders as a bare ` *` separator.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Add a separator line.
    pub fn blank(self) -> Self {
        self.line("")
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl Renderable for DocComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::DocBlock(self.lines.clone())]
    }
}

/// Consecutive `//` line comments.
#[derive(Debug, Clone, Default)]
pub struct LineComments {
    lines: Vec<String>,
}

impl LineComments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

impl Renderable for LineComments {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.lines
            .iter()
            .map(|line| CodeFragment::Line(format!("// {}", line)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use dbts_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_doc_comment() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&DocComment::new().line("Header").blank().line("Fields: 2"));
        assert_eq!(builder.build(), "/**\n * Header\n *\n * Fields: 2\n */\n");
    }

    #[test]
    fn test_single_line_doc_comment_stays_multiline() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&DocComment::new().line("Header"));
        assert_eq!(builder.build(), "/**\n * Header\n */\n");
    }

    #[test]
    fn test_line_comments() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&LineComments::new().line("Type imports").line("import { Date } from './types';"));
        assert_eq!(
            builder.build(),
            "// Type imports\n// import { Date } from './types';\n"
        );
    }
}
