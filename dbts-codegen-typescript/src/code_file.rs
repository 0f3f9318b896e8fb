//! CodeFile abstraction for structured TypeScript file generation.

use dbts_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A TypeScript file made of top-level sections.
///
/// Sections are rendered in insertion order with one blank line between
/// them.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .add(header)
///     .add(Interface::new("User").field_with(InterfaceField::new("id", "number")))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    sections: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.sections.push(node.to_fragments());
        self
    }

    /// Add a section when present.
    pub fn add_opt<R: Renderable>(self, node: Option<R>) -> Self {
        match node {
            Some(node) => self.add(node),
            None => self,
        }
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for (i, fragments) in self.sections.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

}
