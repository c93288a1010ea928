//! Unparser utilities.
//!
//! Raw writes, indentation and the work-list driver. Nodes never render
//! themselves recursively: each one expands into a flat sequence of steps
//! that goes onto an explicit stack, so a deep tree costs heap, not call
//! stack. Nesting depth is still counted and capped by `Config::max_depth`.

use super::declarations::{
    fn_decl_steps, formal_decl_steps, program_steps, record_steps, var_decl_steps,
};
use super::expressions::{assign_steps, call_steps, expr_steps, lval_steps};
use super::statements::stmt_steps;
use super::types::type_steps;
use super::Unparser;
use crate::ast::*;
use crate::error::{Result, ShantyError};
use std::fmt;

/// A node waiting to be expanded
#[derive(Clone, Copy)]
pub(super) enum Item<'t> {
    Program(&'t Program),
    VarDecl(&'t VarDecl),
    FormalDecl(&'t FormalDecl),
    FnDecl(&'t FnDecl),
    Record(&'t RecordTypeDecl),
    Stmt(&'t Stmt),
    Expr(&'t LocatedExpr),
    Call(&'t CallExpr),
    Assign(&'t AssignExpr),
    LVal(&'t LocatedLVal),
    Type(&'t LocatedType),
    Identifier(&'t Identifier),
}

/// One unit of work on the render stack
pub(super) enum Step<'t> {
    Text(&'t str),
    Digits(u64),
    Indent(usize),
    /// Expand a node at the given indent, one nesting level deeper
    Enter(Item<'t>, usize),
    /// Close the level opened by the matching `Enter`
    Leave,
}

impl<'t> Item<'t> {
    fn node(self) -> &'t dyn Node {
        match self {
            Item::Program(node) => node,
            Item::VarDecl(node) => node,
            Item::FormalDecl(node) => node,
            Item::FnDecl(node) => node,
            Item::Record(node) => node,
            Item::Stmt(node) => node,
            Item::Expr(node) => node,
            Item::Call(node) => node,
            Item::Assign(node) => node,
            Item::LVal(node) => node,
            Item::Type(node) => node,
            Item::Identifier(node) => node,
        }
    }

    /// The node's rendering as steps in output order
    fn expand(self, indent: usize) -> Vec<Step<'t>> {
        match self {
            Item::Program(program) => program_steps(program, indent),
            Item::VarDecl(decl) => var_decl_steps(decl, indent),
            Item::FormalDecl(decl) => formal_decl_steps(decl),
            Item::FnDecl(decl) => fn_decl_steps(decl, indent),
            Item::Record(decl) => record_steps(decl, indent),
            Item::Stmt(stmt) => stmt_steps(stmt, indent),
            Item::Expr(expr) => expr_steps(expr),
            Item::Call(call) => call_steps(call),
            Item::Assign(assign) => assign_steps(assign),
            Item::LVal(lval) => lval_steps(lval),
            Item::Type(ty) => type_steps(ty),
            Item::Identifier(name) => vec![Step::Text(name.name())],
        }
    }
}

macro_rules! item_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'t> From<&'t $ty> for Item<'t> {
                fn from(node: &'t $ty) -> Self {
                    Item::$variant(node)
                }
            }
        )*
    };
}

item_from!(
    Program => Program,
    VarDecl => VarDecl,
    FormalDecl => FormalDecl,
    FnDecl => FnDecl,
    RecordTypeDecl => Record,
    Stmt => Stmt,
    LocatedExpr => Expr,
    CallExpr => Call,
    AssignExpr => Assign,
    LocatedLVal => LVal,
    LocatedType => Type,
    Identifier => Identifier,
);

impl<'t> From<&'t Decl> for Item<'t> {
    fn from(decl: &'t Decl) -> Self {
        match decl {
            Decl::Var(decl) => Item::VarDecl(decl),
            Decl::Fn(decl) => Item::FnDecl(decl),
            Decl::Record(decl) => Item::Record(decl),
        }
    }
}

impl<W: fmt::Write + ?Sized> Unparser<'_, W> {
    /// Drains the work list seeded with `root`. On error the depth is left
    /// where it failed; `emit` restores it.
    pub(super) fn run(&mut self, root: Item<'_>, indent: usize) -> Result<()> {
        let mut work = vec![Step::Enter(root, indent)];

        while let Some(step) = work.pop() {
            match step {
                Step::Text(text) => self.write(text)?,
                Step::Digits(value) => self.write(&value.to_string())?,
                Step::Indent(level) => self.indent(level)?,
                Step::Enter(item, indent) => {
                    self.enter(item)?;
                    work.push(Step::Leave);
                    work.extend(item.expand(indent).into_iter().rev());
                }
                Step::Leave => self.depth -= 1,
            }
        }
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_str(text)?;
        Ok(())
    }

    /// Writes `level` indentation units
    fn indent(&mut self, level: usize) -> Result<()> {
        for _ in 0..level {
            self.out.write_str(&self.indent_unit)?;
        }
        Ok(())
    }

    /// Opens one nesting level, failing instead of going past
    /// `Config::max_depth`
    fn enter(&mut self, item: Item<'_>) -> Result<()> {
        if self.depth >= self.config.max_depth {
            let node = item.node();
            return Err(ShantyError::depth_exceeded(
                node.kind(),
                node.span(),
                self.config.max_depth,
            ));
        }

        self.depth += 1;
        Ok(())
    }
}
