//! TypeScript interface builder.

use dbts_codegen::{CodeFragment, Renderable};

/// A property of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub doc: Vec<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            doc: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the field optional when `optional` is true.
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional |= optional;
        self
    }

    /// Add a line to the property's doc comment.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::with_capacity(2);
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::doc_lines(self.doc.iter().cloned()));
        }
        fragments.push(CodeFragment::Line(self.declaration()));
        fragments
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Vec<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a line to the interface's doc comment.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Add a property.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::with_capacity(2);
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::doc_lines(self.doc.iter().cloned()));
        }
        fragments.push(CodeFragment::Block {
            header: format!("export interface {} {{", self.name),
            body: self
                .fields
                .iter()
                .flat_map(InterfaceField::to_fragments)
                .collect(),
            close: Some("}".to_string()),
        });
        fragments
    }
}
