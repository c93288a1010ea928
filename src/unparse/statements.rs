//! Statement rendering
//!
//! Each statement writes its own leading indentation and its own trailing
//! line break. Nested bodies are one level deeper than the statement that
//! owns them.

use super::declarations::var_decl_steps;
use super::formatting::block;
use super::utils::{Item, Step};
use crate::ast::*;

pub(super) fn stmt_steps(stmt: &Stmt, indent: usize) -> Vec<Step<'_>> {
    match stmt {
        Stmt::VarDecl(decl) => var_decl_steps(decl, indent),
        Stmt::Assign(assign) => vec![
            Step::Indent(indent),
            Step::Enter(Item::Assign(assign.assign()), 0),
            Step::Text(";\n"),
        ],
        Stmt::Call(call) => vec![
            Step::Indent(indent),
            Step::Enter(Item::Call(call.call()), 0),
            Step::Text(";\n"),
        ],
        Stmt::PostInc(update) => vec![
            Step::Indent(indent),
            Step::Enter(Item::LVal(update.target()), 0),
            Step::Text("++;\n"),
        ],
        Stmt::PostDec(update) => vec![
            Step::Indent(indent),
            Step::Enter(Item::LVal(update.target()), 0),
            Step::Text("--;\n"),
        ],
        Stmt::Receive(receive) => vec![
            Step::Indent(indent),
            Step::Text("receive "),
            Step::Enter(Item::LVal(receive.target()), 0),
            Step::Text(";\n"),
        ],
        Stmt::Report(report) => vec![
            Step::Indent(indent),
            Step::Text("report "),
            Step::Enter(Item::Expr(report.value()), 0),
            Step::Text(";\n"),
        ],
        Stmt::Return(ret) => match ret.value() {
            Some(value) => vec![
                Step::Indent(indent),
                Step::Text("return "),
                Step::Enter(Item::Expr(value), 0),
                Step::Text(";\n"),
            ],
            None => vec![Step::Indent(indent), Step::Text("return;\n")],
        },
        Stmt::If(if_stmt) => {
            let mut steps = condition(indent, "if", if_stmt.condition());
            steps.extend(block(if_stmt.body(), indent));
            steps
        }
        Stmt::IfElse(if_else) => {
            let mut steps = condition(indent, "if", if_else.condition());
            steps.extend(block(if_else.then_body(), indent));
            steps.push(Step::Indent(indent));
            steps.push(Step::Text("else "));
            steps.extend(block(if_else.else_body(), indent));
            steps
        }
        Stmt::While(while_stmt) => {
            let mut steps = condition(indent, "while", while_stmt.condition());
            steps.extend(block(while_stmt.body(), indent));
            steps
        }
    }
}

/// `<indent><keyword> (<condition>) `
fn condition<'t>(indent: usize, keyword: &'t str, condition: &'t LocatedExpr) -> Vec<Step<'t>> {
    vec![
        Step::Indent(indent),
        Step::Text(keyword),
        Step::Text(" ("),
        Step::Enter(Item::Expr(condition), 0),
        Step::Text(") "),
    ]
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::span::Span;
    use crate::unparse::Render;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name, Span::zero()).unwrap()
    }

    fn var(name: &str) -> LocatedLVal {
        LVal::id(ident(name))
    }

    fn rendered(stmt: &Stmt, indent: usize) -> String {
        let mut out = String::new();
        stmt.render(&mut out, indent).unwrap();
        out
    }

    #[test]
    fn test_simple_statements() {
        let cases = vec![
            (Stmt::post_inc(var("i"), Span::zero()), "i++;\n"),
            (Stmt::post_dec(var("i"), Span::zero()), "i--;\n"),
            (Stmt::receive(var("x"), Span::zero()), "receive x;\n"),
            (
                Stmt::report(Expr::int_lit(3, Span::zero()), Span::zero()),
                "report 3;\n",
            ),
            (Stmt::ret(None, Span::zero()), "return;\n"),
            (
                Stmt::ret(Some(Expr::id(ident("x"))), Span::zero()),
                "return x;\n",
            ),
            (
                Stmt::assign(
                    AssignExpr::new(var("x"), Expr::int_lit(1, Span::zero())),
                    Span::zero(),
                ),
                "x = 1;\n",
            ),
            (
                Stmt::call(CallExpr::new(ident("tick"), vec![], Span::zero()), Span::zero()),
                "tick();\n",
            ),
        ];

        for (stmt, expected) in cases {
            assert_eq!(rendered(&stmt, 0), expected);
        }
    }

    #[test]
    fn test_if_else_layout() {
        let stmt = Stmt::if_then_else(
            Expr::id(ident("ok")),
            vec![Stmt::report(Expr::true_lit(Span::zero()), Span::zero())],
            vec![Stmt::report(Expr::false_lit(Span::zero()), Span::zero())],
            Span::zero(),
        );

        assert_eq!(
            rendered(&stmt, 1),
            "\tif (ok) {\n\t\treport true;\n\t}\n\telse {\n\t\treport false;\n\t}\n"
        );
    }

    #[test]
    fn test_local_var_decl_statement() {
        let decl = VarDecl::new(Type::int(Span::zero()), ident("n"), Span::zero());
        let stmt = Stmt::var_decl(decl);
        assert_eq!(rendered(&stmt, 1), "\tint n;\n");
    }
}
