//! Program structure definition
//!
//! The root of the tree, owning every top-level declaration in source order.

use super::{cover, Decl, FnDecl, Node, NodeKind, RecordTypeDecl, VarDecl};
use crate::span::Span;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    globals: Vec<Decl>,
    span: Span,
}

impl Program {
    /// An empty program is legal and gets the zero-width span.
    pub fn new(globals: Vec<Decl>) -> Self {
        let span = cover(Span::zero(), globals.iter().map(Decl::span));
        Self { globals, span }
    }

    pub fn globals(&self) -> &[Decl] {
        &self.globals
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FnDecl> {
        self.globals.iter().filter_map(|decl| match decl {
            Decl::Fn(f) => Some(f),
            _ => None,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordTypeDecl> {
        self.globals.iter().filter_map(|decl| match decl {
            Decl::Record(r) => Some(r),
            _ => None,
        })
    }

    pub fn variables(&self) -> impl Iterator<Item = &VarDecl> {
        self.globals.iter().filter_map(|decl| match decl {
            Decl::Var(v) => Some(v),
            _ => None,
        })
    }

    /// Pretty-printed JSON dump of the whole tree, for inspecting parser output
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Node for Program {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}
