//! Declarations: variables, parameters, functions and record types

use super::{cover, Identifier, LocatedType, Node, NodeKind, Stmt, StmtExt};
use crate::error::{Result, ShantyError};
use crate::span::Span;
use serde::Serialize;

/// `<type> <name>;` at global, local or record-field scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    ty: LocatedType,
    name: Identifier,
    span: Span,
}

impl VarDecl {
    pub fn new(ty: LocatedType, name: Identifier, span: Span) -> Self {
        let span = cover(span, [ty.span(), name.span()]);
        Self { ty, name, span }
    }

    pub fn ty(&self) -> &LocatedType {
        &self.ty
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

/// A function parameter. It has no terminator of its own; the parameter
/// list supplies the separators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormalDecl {
    ty: LocatedType,
    name: Identifier,
    span: Span,
}

impl FormalDecl {
    pub fn new(ty: LocatedType, name: Identifier) -> Self {
        let span = cover(Span::zero(), [ty.span(), name.span()]);
        Self { ty, name, span }
    }

    pub fn ty(&self) -> &LocatedType {
        &self.ty
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FnDecl {
    return_type: LocatedType,
    name: Identifier,
    params: Vec<FormalDecl>,
    body: Vec<Stmt>,
    span: Span,
}

impl FnDecl {
    /// Fails if a `return` anywhere in the body disagrees with the return
    /// type: a value returned from a `void` function, or a bare `return;`
    /// in a function that must produce a value.
    pub fn new(
        return_type: LocatedType,
        name: Identifier,
        params: Vec<FormalDecl>,
        body: Vec<Stmt>,
        span: Span,
    ) -> Result<Self> {
        let returns_void = return_type.node().is_void();

        for stmt in &body {
            stmt.walk(&mut |stmt| match stmt {
                Stmt::Return(ret) if returns_void && ret.value().is_some() => {
                    Err(ShantyError::invalid_tree(
                        NodeKind::Return,
                        ret.span(),
                        format!("void function `{}` cannot return a value", name),
                    ))
                }
                Stmt::Return(ret) if !returns_void && ret.value().is_none() => {
                    Err(ShantyError::invalid_tree(
                        NodeKind::Return,
                        ret.span(),
                        format!(
                            "function `{}` must return a `{}` value",
                            name,
                            return_type.node()
                        ),
                    ))
                }
                _ => Ok(()),
            })?;
        }

        let span = cover(
            span,
            [return_type.span(), name.span()]
                .into_iter()
                .chain(params.iter().map(|p| p.span))
                .chain(body.iter().map(Stmt::span)),
        );

        Ok(Self {
            return_type,
            name,
            params,
            body,
            span,
        })
    }

    pub fn return_type(&self) -> &LocatedType {
        &self.return_type
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn params(&self) -> &[FormalDecl] {
        &self.params
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

/// `record <name> { <field decls> }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordTypeDecl {
    name: Identifier,
    fields: Vec<VarDecl>,
    span: Span,
}

impl RecordTypeDecl {
    pub fn new(name: Identifier, fields: Vec<VarDecl>, span: Span) -> Self {
        let span = cover(
            span,
            std::iter::once(name.span()).chain(fields.iter().map(|f| f.span)),
        );
        Self { name, fields, span }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn fields(&self) -> &[VarDecl] {
        &self.fields
    }
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
    Record(RecordTypeDecl),
}

impl Decl {
    pub fn name(&self) -> &Identifier {
        match self {
            Decl::Var(decl) => decl.name(),
            Decl::Fn(decl) => decl.name(),
            Decl::Record(decl) => decl.name(),
        }
    }
}

impl From<VarDecl> for Decl {
    fn from(decl: VarDecl) -> Self {
        Decl::Var(decl)
    }
}

impl From<FnDecl> for Decl {
    fn from(decl: FnDecl) -> Self {
        Decl::Fn(decl)
    }
}

impl From<RecordTypeDecl> for Decl {
    fn from(decl: RecordTypeDecl) -> Self {
        Decl::Record(decl)
    }
}

impl Node for VarDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VarDecl
    }
}

impl Node for FormalDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::FormalDecl
    }
}

impl Node for FnDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::FnDecl
    }
}

impl Node for RecordTypeDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::RecordTypeDecl
    }
}

impl Node for Decl {
    fn span(&self) -> Span {
        match self {
            Decl::Var(decl) => decl.span,
            Decl::Fn(decl) => decl.span,
            Decl::Record(decl) => decl.span,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Decl::Var(_) => NodeKind::VarDecl,
            Decl::Fn(_) => NodeKind::FnDecl,
            Decl::Record(_) => NodeKind::RecordTypeDecl,
        }
    }
}
