//! Statements
//!
//! Every statement carries the span of its full source text, terminator and
//! braces included. Bodies are ordered and may be empty.

use super::{cover, AssignExpr, CallExpr, LocatedExpr, LocatedLVal, Node, NodeKind, VarDecl};
use crate::span::Span;
use serde::Serialize;
use std::mem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// Local variable declaration
    VarDecl(VarDecl),
    Assign(AssignStmt),
    Call(CallStmt),
    PostInc(UpdateStmt),
    PostDec(UpdateStmt),
    Receive(ReceiveStmt),
    Report(ReportStmt),
    Return(ReturnStmt),
    If(IfStmt),
    IfElse(IfElseStmt),
    While(WhileStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignStmt {
    assign: AssignExpr,
    span: Span,
}

impl AssignStmt {
    pub fn assign(&self) -> &AssignExpr {
        &self.assign
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallStmt {
    call: CallExpr,
    span: Span,
}

impl CallStmt {
    pub fn call(&self) -> &CallExpr {
        &self.call
    }
}

/// Target of `++` or `--`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStmt {
    target: LocatedLVal,
    span: Span,
}

impl UpdateStmt {
    pub fn target(&self) -> &LocatedLVal {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiveStmt {
    target: LocatedLVal,
    span: Span,
}

impl ReceiveStmt {
    pub fn target(&self) -> &LocatedLVal {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStmt {
    value: LocatedExpr,
    span: Span,
}

impl ReportStmt {
    pub fn value(&self) -> &LocatedExpr {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStmt {
    value: Option<LocatedExpr>,
    span: Span,
}

impl ReturnStmt {
    /// `None` for a bare `return;`
    pub fn value(&self) -> Option<&LocatedExpr> {
        self.value.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    condition: LocatedExpr,
    body: Vec<Stmt>,
    span: Span,
}

impl IfStmt {
    pub fn condition(&self) -> &LocatedExpr {
        &self.condition
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfElseStmt {
    condition: LocatedExpr,
    then_body: Vec<Stmt>,
    else_body: Vec<Stmt>,
    span: Span,
}

impl IfElseStmt {
    pub fn condition(&self) -> &LocatedExpr {
        &self.condition
    }

    pub fn then_body(&self) -> &[Stmt] {
        &self.then_body
    }

    pub fn else_body(&self) -> &[Stmt] {
        &self.else_body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    condition: LocatedExpr,
    body: Vec<Stmt>,
    span: Span,
}

impl WhileStmt {
    pub fn condition(&self) -> &LocatedExpr {
        &self.condition
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

fn body_spans(body: &[Stmt]) -> impl Iterator<Item = Span> + '_ {
    body.iter().map(Stmt::span)
}

impl Stmt {
    pub fn var_decl(decl: VarDecl) -> Stmt {
        Stmt::VarDecl(decl)
    }

    pub fn assign(assign: AssignExpr, span: Span) -> Stmt {
        let span = cover(span, [assign.span()]);
        Stmt::Assign(AssignStmt { assign, span })
    }

    pub fn call(call: CallExpr, span: Span) -> Stmt {
        let span = cover(span, [call.span()]);
        Stmt::Call(CallStmt { call, span })
    }

    pub fn post_inc(target: LocatedLVal, span: Span) -> Stmt {
        let span = cover(span, [target.span()]);
        Stmt::PostInc(UpdateStmt { target, span })
    }

    pub fn post_dec(target: LocatedLVal, span: Span) -> Stmt {
        let span = cover(span, [target.span()]);
        Stmt::PostDec(UpdateStmt { target, span })
    }

    pub fn receive(target: LocatedLVal, span: Span) -> Stmt {
        let span = cover(span, [target.span()]);
        Stmt::Receive(ReceiveStmt { target, span })
    }

    pub fn report(value: LocatedExpr, span: Span) -> Stmt {
        let span = cover(span, [value.span()]);
        Stmt::Report(ReportStmt { value, span })
    }

    /// Whether the value matches the enclosing function's return type is
    /// checked by `FnDecl::new`.
    pub fn ret(value: Option<LocatedExpr>, span: Span) -> Stmt {
        let span = cover(span, value.iter().map(|v| v.span()));
        Stmt::Return(ReturnStmt { value, span })
    }

    pub fn if_then(condition: LocatedExpr, body: Vec<Stmt>, span: Span) -> Stmt {
        let span = cover(
            span,
            std::iter::once(condition.span()).chain(body_spans(&body)),
        );
        Stmt::If(IfStmt {
            condition,
            body,
            span,
        })
    }

    pub fn if_then_else(
        condition: LocatedExpr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
        span: Span,
    ) -> Stmt {
        let span = cover(
            span,
            std::iter::once(condition.span())
                .chain(body_spans(&then_body))
                .chain(body_spans(&else_body)),
        );
        Stmt::IfElse(IfElseStmt {
            condition,
            then_body,
            else_body,
            span,
        })
    }

    pub fn while_loop(condition: LocatedExpr, body: Vec<Stmt>, span: Span) -> Stmt {
        let span = cover(
            span,
            std::iter::once(condition.span()).chain(body_spans(&body)),
        );
        Stmt::While(WhileStmt {
            condition,
            body,
            span,
        })
    }

    /// Bodies this statement owns directly, in source order
    pub fn bodies(&self) -> Vec<&[Stmt]> {
        match self {
            Stmt::If(if_stmt) => vec![if_stmt.body()],
            Stmt::IfElse(if_else) => vec![if_else.then_body(), if_else.else_body()],
            Stmt::While(while_stmt) => vec![while_stmt.body()],
            _ => Vec::new(),
        }
    }
}

/// Nested bodies are torn down from a heap stack instead of by recursive
/// drop glue.
impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = take_bodies(self);
        while let Some(mut stmt) = pending.pop() {
            pending.append(&mut take_bodies(&mut stmt));
        }
    }
}

fn take_bodies(stmt: &mut Stmt) -> Vec<Stmt> {
    match stmt {
        Stmt::If(if_stmt) => mem::take(&mut if_stmt.body),
        Stmt::IfElse(if_else) => {
            let mut bodies = mem::take(&mut if_else.then_body);
            bodies.append(&mut if_else.else_body);
            bodies
        }
        Stmt::While(while_stmt) => mem::take(&mut while_stmt.body),
        _ => Vec::new(),
    }
}

impl Node for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::VarDecl(decl) => decl.span(),
            Stmt::Assign(s) => s.span,
            Stmt::Call(s) => s.span,
            Stmt::PostInc(s) | Stmt::PostDec(s) => s.span,
            Stmt::Receive(s) => s.span,
            Stmt::Report(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::IfElse(s) => s.span,
            Stmt::While(s) => s.span,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Stmt::VarDecl(_) => NodeKind::VarDecl,
            Stmt::Assign(_) => NodeKind::Assign,
            Stmt::Call(_) => NodeKind::Call,
            Stmt::PostInc(_) => NodeKind::PostInc,
            Stmt::PostDec(_) => NodeKind::PostDec,
            Stmt::Receive(_) => NodeKind::Receive,
            Stmt::Report(_) => NodeKind::Report,
            Stmt::Return(_) => NodeKind::Return,
            Stmt::If(_) => NodeKind::If,
            Stmt::IfElse(_) => NodeKind::IfElse,
            Stmt::While(_) => NodeKind::While,
        }
    }
}

impl Node for ReturnStmt {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Return
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Identifier, LVal};

    fn id(name: &str, line: usize, column: usize) -> LocatedLVal {
        let span = Span::from_coords(line, column, line, column + name.len());
        LVal::id(Identifier::new(name, span).unwrap())
    }

    #[test]
    fn test_statement_span_includes_terminator() {
        let stmt = Stmt::post_inc(id("i", 3, 5), Span::from_coords(3, 5, 3, 9));
        assert_eq!(stmt.span(), Span::from_coords(3, 5, 3, 9));
        assert_eq!(stmt.kind(), NodeKind::PostInc);
    }

    #[test]
    fn test_while_span_covers_body() {
        let body = vec![Stmt::post_dec(id("n", 5, 2), Span::from_coords(5, 2, 5, 6))];
        let stmt = Stmt::while_loop(
            Expr::true_lit(Span::from_coords(4, 8, 4, 12)),
            body,
            Span::from_coords(4, 1, 4, 15),
        );

        assert_eq!(stmt.span(), Span::from_coords(4, 1, 5, 6));
        assert_eq!(stmt.bodies().len(), 1);
    }

    #[test]
    fn test_zero_span_defers_to_children() {
        let stmt = Stmt::report(
            Expr::int_lit(7, Span::from_coords(9, 8, 9, 9)),
            Span::zero(),
        );
        assert_eq!(stmt.span(), Span::from_coords(9, 8, 9, 9));
    }

    #[test]
    fn test_bare_return_has_no_value() {
        let stmt = Stmt::ret(None, Span::from_coords(2, 2, 2, 9));
        match &stmt {
            Stmt::Return(ret) => assert!(ret.value().is_none()),
            other => panic!("expected return, got {:?}", other),
        }
    }

    #[test]
    fn test_deeply_nested_bodies_drop_without_recursion() {
        let mut stmt = Stmt::post_inc(id("i", 1, 1), Span::zero());
        for _ in 0..200_000 {
            stmt = Stmt::while_loop(Expr::true_lit(Span::zero()), vec![stmt], Span::zero());
        }
        assert!(matches!(&stmt, Stmt::While(_)));
        drop(stmt);
    }
}
