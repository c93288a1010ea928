//! Expression rendering
//!
//! Expressions never emit indentation or line breaks. Every binary
//! expression is fully parenthesized, so the output never depends on
//! operator precedence.

use super::formatting::separated;
use super::utils::{Item, Step};
use crate::ast::*;

pub(super) fn expr_steps(expr: &LocatedExpr) -> Vec<Step<'_>> {
    match expr.node() {
        Expr::IntLit(value) => vec![Step::Digits(*value)],
        Expr::StrLit(lexeme) => vec![Step::Text(lexeme.as_str())],
        Expr::True => vec![Step::Text("true")],
        Expr::False => vec![Step::Text("false")],
        Expr::Unary(unary) => vec![
            Step::Text(unary.op().keyword()),
            Step::Text(" "),
            Step::Enter(Item::Expr(unary.operand()), 0),
        ],
        Expr::Binary(binary) => vec![
            Step::Text("("),
            Step::Enter(Item::Expr(binary.left()), 0),
            Step::Text(" "),
            Step::Text(binary.op().symbol()),
            Step::Text(" "),
            Step::Enter(Item::Expr(binary.right()), 0),
            Step::Text(")"),
        ],
        Expr::Call(call) => call_steps(call),
        Expr::Assign(assign) => assign_steps(assign),
        Expr::LVal(lval) => lval_node_steps(lval),
    }
}

/// `callee(arg, arg)`
pub(super) fn call_steps(call: &CallExpr) -> Vec<Step<'_>> {
    let mut steps = vec![Step::Text(call.callee().name()), Step::Text("(")];
    steps.extend(separated(call.args()));
    steps.push(Step::Text(")"));
    steps
}

/// `target = value`, no terminator
pub(super) fn assign_steps(assign: &AssignExpr) -> Vec<Step<'_>> {
    vec![
        Step::Enter(Item::LVal(assign.target()), 0),
        Step::Text(" = "),
        Step::Enter(Item::Expr(assign.value()), 0),
    ]
}

pub(super) fn lval_steps(lval: &LocatedLVal) -> Vec<Step<'_>> {
    lval_node_steps(lval.node())
}

fn lval_node_steps(lval: &LVal) -> Vec<Step<'_>> {
    match lval {
        LVal::Id(name) => vec![Step::Text(name.name())],
        LVal::FieldAccess(access) => vec![
            Step::Enter(Item::LVal(access.base()), 0),
            Step::Text("."),
            Step::Text(access.field().name()),
        ],
    }
}
