//! Import hint comments.

use dbts_codegen::{CodeFragment, Renderable};
use indexmap::IndexSet;

use crate::{ast::LineComments, resolve::ResolvedField};

/// Commented-out imports for types the declarations rely on.
pub(crate) struct ImportHints {
    types: IndexSet<&'static str>,
}

impl ImportHints {
    /// Collect the distinct types to hint at, or `None` when nothing needs one.
    pub fn collect(fields: &[ResolvedField<'_>]) -> Option<Self> {
        let types: IndexSet<&'static str> = fields
            .iter()
            .filter(|f| f.needs_date_import())
            .map(|_| "Date")
            .collect();

        (!types.is_empty()).then_some(Self { types })
    }
}

impl Renderable for ImportHints {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.types
            .iter()
            .fold(LineComments::new().line("Type imports"), |comments, ty| {
                comments.line(format!("import {{ {} }} from './types';", ty))
            })
            .to_fragments()
    }
}
