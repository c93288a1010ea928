//! Expressions, lvalues and identifiers

use super::{cover, Located, Node, NodeKind};
use crate::error::{Result, ShantyError};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Words the lexer never hands out as identifiers
pub const RESERVED_WORDS: &[&str] = &[
    "int", "bool", "void", "string", "record", "if", "else", "while", "return", "receive",
    "report", "true", "false", "not", "neg",
];

/// A name as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    name: String,
    span: Span,
}

impl Identifier {
    /// Rejects empty names, names that are not `[A-Za-z_][A-Za-z0-9_]*`, and
    /// reserved words.
    pub fn new(name: impl Into<String>, span: Span) -> Result<Self> {
        let name = name.into();

        let mut chars = name.chars();
        let legal = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => {
                return Err(ShantyError::invalid_tree(
                    NodeKind::Identifier,
                    span,
                    "identifier name is empty",
                ));
            }
        };

        if !legal {
            return Err(ShantyError::invalid_tree(
                NodeKind::Identifier,
                span,
                format!("`{}` is not a legal identifier", name),
            ));
        }

        if RESERVED_WORDS.contains(&name.as_str()) {
            return Err(ShantyError::invalid_tree(
                NodeKind::Identifier,
                span,
                format!("`{}` is a reserved word", name),
            )
            .with_help("pick a name that is not a keyword"));
        }

        Ok(Self { name, span })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Identifier {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    IntLit(u64),
    /// Lexeme exactly as the lexer produced it, quotes included
    StrLit(String),
    True,
    False,
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Assign(AssignExpr),
    LVal(LVal),
}

pub type LocatedExpr = Located<Expr>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl UnaryOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Neg => "neg",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 12] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::Less,
        BinaryOp::LessEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpr {
    op: UnaryOp,
    operand: Box<LocatedExpr>,
}

impl UnaryExpr {
    pub fn op(&self) -> UnaryOp {
        self.op
    }

    pub fn operand(&self) -> &LocatedExpr {
        &self.operand
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    op: BinaryOp,
    left: Box<LocatedExpr>,
    right: Box<LocatedExpr>,
}

impl BinaryExpr {
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn left(&self) -> &LocatedExpr {
        &self.left
    }

    pub fn right(&self) -> &LocatedExpr {
        &self.right
    }
}

/// `callee(arg0, arg1, ...)`, usable both as an expression and a statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpr {
    callee: Identifier,
    args: Vec<LocatedExpr>,
    span: Span,
}

impl CallExpr {
    /// `span` covers the parentheses; an empty argument list is legal.
    pub fn new(callee: Identifier, args: Vec<LocatedExpr>, span: Span) -> Self {
        let span = cover(
            span,
            std::iter::once(callee.span()).chain(args.iter().map(|arg| arg.span)),
        );
        Self { callee, args, span }
    }

    pub fn callee(&self) -> &Identifier {
        &self.callee
    }

    pub fn args(&self) -> &[LocatedExpr] {
        &self.args
    }
}

impl Node for CallExpr {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Call
    }
}

/// `target = value`, usable both as an expression and a statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignExpr {
    target: LocatedLVal,
    value: Box<LocatedExpr>,
    span: Span,
}

impl AssignExpr {
    pub fn new(target: LocatedLVal, value: LocatedExpr) -> Self {
        let span = cover(Span::zero(), [target.span, value.span]);
        Self {
            target,
            value: Box::new(value),
            span,
        }
    }

    pub fn target(&self) -> &LocatedLVal {
        &self.target
    }

    pub fn value(&self) -> &LocatedExpr {
        &self.value
    }
}

impl Node for AssignExpr {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Assign
    }
}

/// Assignable location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LVal {
    Id(Identifier),
    FieldAccess(FieldAccess),
}

pub type LocatedLVal = Located<LVal>;

/// `base.field`; the base is itself an lvalue so accesses chain left to right
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAccess {
    base: Box<LocatedLVal>,
    field: Identifier,
}

impl FieldAccess {
    pub fn base(&self) -> &LocatedLVal {
        &self.base
    }

    pub fn field(&self) -> &Identifier {
        &self.field
    }
}

impl LVal {
    pub fn id(name: Identifier) -> LocatedLVal {
        let span = name.span();
        Located::new(LVal::Id(name), span)
    }

    pub fn field_access(base: LocatedLVal, field: Identifier) -> LocatedLVal {
        let span = cover(Span::zero(), [base.span, field.span()]);
        Located::new(
            LVal::FieldAccess(FieldAccess {
                base: Box::new(base),
                field,
            }),
            span,
        )
    }
}

impl Node for LocatedLVal {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        match &self.node {
            LVal::Id(_) => NodeKind::Identifier,
            LVal::FieldAccess(_) => NodeKind::FieldAccess,
        }
    }
}

impl Expr {
    pub fn int_lit(value: u64, span: Span) -> LocatedExpr {
        Located::new(Expr::IntLit(value), span)
    }

    pub fn str_lit(lexeme: impl Into<String>, span: Span) -> Result<LocatedExpr> {
        let lexeme = lexeme.into();
        if lexeme.is_empty() {
            return Err(ShantyError::invalid_tree(
                NodeKind::StrLit,
                span,
                "string literal has no lexeme",
            ));
        }
        Ok(Located::new(Expr::StrLit(lexeme), span))
    }

    pub fn true_lit(span: Span) -> LocatedExpr {
        Located::new(Expr::True, span)
    }

    pub fn false_lit(span: Span) -> LocatedExpr {
        Located::new(Expr::False, span)
    }

    /// `op_span` is the span of the `not`/`neg` keyword
    pub fn unary(op: UnaryOp, operand: LocatedExpr, op_span: Span) -> LocatedExpr {
        let span = cover(op_span, [operand.span]);
        Located::new(
            Expr::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
            }),
            span,
        )
    }

    pub fn binary(op: BinaryOp, left: LocatedExpr, right: LocatedExpr) -> LocatedExpr {
        let span = cover(Span::zero(), [left.span, right.span]);
        Located::new(
            Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
            }),
            span,
        )
    }

    pub fn call(call: CallExpr) -> LocatedExpr {
        let span = call.span;
        Located::new(Expr::Call(call), span)
    }

    pub fn assign(assign: AssignExpr) -> LocatedExpr {
        let span = assign.span;
        Located::new(Expr::Assign(assign), span)
    }

    pub fn lval(lval: LocatedLVal) -> LocatedExpr {
        Located::new(Expr::LVal(lval.node), lval.span)
    }

    /// Shorthand for an identifier used as an expression
    pub fn id(name: Identifier) -> LocatedExpr {
        Expr::lval(LVal::id(name))
    }
}

impl Node for LocatedExpr {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> NodeKind {
        match &self.node {
            Expr::IntLit(_) => NodeKind::IntLit,
            Expr::StrLit(_) => NodeKind::StrLit,
            Expr::True => NodeKind::True,
            Expr::False => NodeKind::False,
            Expr::Unary(_) => NodeKind::Unary,
            Expr::Binary(_) => NodeKind::Binary,
            Expr::Call(_) => NodeKind::Call,
            Expr::Assign(_) => NodeKind::Assign,
            Expr::LVal(LVal::Id(_)) => NodeKind::Identifier,
            Expr::LVal(LVal::FieldAccess(_)) => NodeKind::FieldAccess,
        }
    }
}
