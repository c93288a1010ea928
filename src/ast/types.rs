//! Type annotations

use super::{Identifier, Located, Node, NodeKind};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Type {
    Int,
    Bool,
    Void,
    String,
    /// Reference to a user-declared record type by name
    Record(Identifier),
}

pub type LocatedType = Located<Type>;

impl Type {
    pub fn int(span: Span) -> LocatedType {
        Located::new(Type::Int, span)
    }

    pub fn bool(span: Span) -> LocatedType {
        Located::new(Type::Bool, span)
    }

    pub fn void(span: Span) -> LocatedType {
        Located::new(Type::Void, span)
    }

    pub fn string(span: Span) -> LocatedType {
        Located::new(Type::String, span)
    }

    pub fn record(name: Identifier) -> LocatedType {
        let span = name.span();
        Located::new(Type::Record(name), span)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// The text this type renders as
    pub fn name(&self) -> &str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::Void => "void",
            Type::String => "string",
            Type::Record(name) => name.name(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node for LocatedType {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Type
    }
}
