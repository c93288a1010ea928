//! Abstract Syntax Tree (AST) for cshanty
//!
//! The tree is a closed set of tagged variants grouped by syntactic
//! category: declarations, statements, expressions, lvalues and types. Each
//! composite node owns its children exclusively. Fields are private, so a
//! node can only come into existence through the constructors in this module,
//! which check structural validity and compute spans. Nothing mutates a node
//! once it is built.

pub mod decl;
pub mod expr;
pub mod program;
pub mod stmt;
pub mod traversal;
pub mod types;

pub use decl::*;
pub use expr::*;
pub use program::*;
pub use stmt::*;
pub use traversal::{ExprExt, StmtExt};
pub use types::*;

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// A wrapper for AST nodes that includes source location information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Located<T> {
    node: T,
    span: Span,
}

impl<T> Located<T> {
    pub(crate) fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    pub fn node(&self) -> &T {
        &self.node
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Behaviour shared by every node in the tree
pub trait Node {
    fn span(&self) -> Span;
    fn kind(&self) -> NodeKind;
}

/// Every syntactic kind a node can have; used to name nodes in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    VarDecl,
    FormalDecl,
    FnDecl,
    RecordTypeDecl,
    Assign,
    Call,
    PostInc,
    PostDec,
    Receive,
    Report,
    Return,
    If,
    IfElse,
    While,
    IntLit,
    StrLit,
    True,
    False,
    Unary,
    Binary,
    Identifier,
    FieldAccess,
    Type,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::VarDecl => "variable declaration",
            NodeKind::FormalDecl => "parameter declaration",
            NodeKind::FnDecl => "function declaration",
            NodeKind::RecordTypeDecl => "record declaration",
            NodeKind::Assign => "assignment",
            NodeKind::Call => "call",
            NodeKind::PostInc => "post-increment",
            NodeKind::PostDec => "post-decrement",
            NodeKind::Receive => "receive statement",
            NodeKind::Report => "report statement",
            NodeKind::Return => "return statement",
            NodeKind::If => "if statement",
            NodeKind::IfElse => "if-else statement",
            NodeKind::While => "while statement",
            NodeKind::IntLit => "integer literal",
            NodeKind::StrLit => "string literal",
            NodeKind::True => "true literal",
            NodeKind::False => "false literal",
            NodeKind::Unary => "unary expression",
            NodeKind::Binary => "binary expression",
            NodeKind::Identifier => "identifier",
            NodeKind::FieldAccess => "field access",
            NodeKind::Type => "type",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Span of a composite node: its own token span widened over its children.
/// A zero span contributes nothing, so parsers may pass `Span::zero()` when
/// the node has no tokens of its own.
pub(crate) fn cover<I>(own: Span, children: I) -> Span
where
    I: IntoIterator<Item = Span>,
{
    let own = (own != Span::zero()).then_some(own);
    let children = children.into_iter().filter(|span| *span != Span::zero());
    Span::enclosing(own.into_iter().chain(children)).unwrap_or_else(Span::zero)
}
