//! AST traversal traits for walking expression and statement trees.
//!
//! Visitors return `Result`; an `Err` stops the walk early and is handed back
//! to the caller unchanged. Walks keep their own stack of pending nodes, so
//! arbitrarily deep trees do not grow the call stack.

use super::*;

pub trait ExprExt {
    /// Walk the expression tree in pre-order
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Walk the expression tree in post-order
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Find all sub-expressions matching a predicate, in pre-order
    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&LocatedExpr>
    where
        F: Fn(&LocatedExpr) -> bool;

    /// Check if any sub-expression matches a predicate
    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool;
}

/// Direct expression children, left to right. Lvalues are not expressions
/// in their own right here, so an assignment yields only its value.
fn children(expr: &LocatedExpr) -> Vec<&LocatedExpr> {
    match expr.node() {
        Expr::Unary(unary) => vec![unary.operand()],
        Expr::Binary(binary) => vec![binary.left(), binary.right()],
        Expr::Call(call) => call.args().iter().collect(),
        Expr::Assign(assign) => vec![assign.value()],
        Expr::IntLit(_) | Expr::StrLit(_) | Expr::True | Expr::False | Expr::LVal(_) => Vec::new(),
    }
}

impl ExprExt for LocatedExpr {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            visitor(expr)?;
            pending.extend(children(expr).into_iter().rev());
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        // The flag marks nodes whose children are already queued
        let mut pending = vec![(self, false)];
        while let Some((expr, expanded)) = pending.pop() {
            if expanded {
                visitor(expr)?;
            } else {
                pending.push((expr, true));
                pending.extend(children(expr).into_iter().rev().map(|child| (child, false)));
            }
        }
        Ok(())
    }

    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&LocatedExpr>
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        let mut results = Vec::new();
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            if predicate(expr) {
                results.push(expr);
            }
            pending.extend(children(expr).into_iter().rev());
        }
        results
    }

    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&LocatedExpr) -> bool,
    {
        self.walk(&mut |expr| if predicate(expr) { Err(()) } else { Ok(()) })
            .is_err()
    }
}

/// Extension trait for statement traversal
pub trait StmtExt {
    /// Walk this statement and every statement nested in its bodies, pre-order
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>;

    /// Walk nested statements first, then this one
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>;

    /// Walk every expression reachable from this statement, nested bodies
    /// included, in source order
    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Returns true if the statement or any nested statement is a `return`
    fn contains_return(&self) -> bool;
}

/// Statements nested directly in `stmt`'s bodies, in source order
fn nested(stmt: &Stmt) -> impl DoubleEndedIterator<Item = &Stmt> {
    stmt.bodies().into_iter().flatten()
}

/// Expressions owned directly by `stmt`, excluding those in nested bodies
fn own_expressions(stmt: &Stmt) -> Vec<&LocatedExpr> {
    match stmt {
        Stmt::Assign(assign) => vec![assign.assign().value()],
        Stmt::Call(call) => call.call().args().iter().collect(),
        Stmt::Report(report) => vec![report.value()],
        Stmt::Return(ret) => ret.value().into_iter().collect(),
        Stmt::If(if_stmt) => vec![if_stmt.condition()],
        Stmt::IfElse(if_else) => vec![if_else.condition()],
        Stmt::While(while_stmt) => vec![while_stmt.condition()],
        Stmt::VarDecl(_) | Stmt::PostInc(_) | Stmt::PostDec(_) | Stmt::Receive(_) => Vec::new(),
    }
}

impl StmtExt for Stmt {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>,
    {
        let mut pending = vec![self];
        while let Some(stmt) = pending.pop() {
            visitor(stmt)?;
            pending.extend(nested(stmt).rev());
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>,
    {
        let mut pending = vec![(self, false)];
        while let Some((stmt, expanded)) = pending.pop() {
            if expanded {
                visitor(stmt)?;
            } else {
                pending.push((stmt, true));
                pending.extend(nested(stmt).rev().map(|child| (child, false)));
            }
        }
        Ok(())
    }

    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        self.walk(&mut |stmt| {
            for expr in own_expressions(stmt) {
                expr.walk(visitor)?;
            }
            Ok(())
        })
    }

    fn contains_return(&self) -> bool {
        self.walk(&mut |stmt| match stmt {
            Stmt::Return(_) => Err(()),
            _ => Ok(()),
        })
        .is_err()
    }
}
