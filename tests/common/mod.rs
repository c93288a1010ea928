#![allow(dead_code)]

pub mod error_assertions;

use cshanty::{
    AssignExpr, BinaryOp, CallExpr, Config, Decl, Expr, FnDecl, FormalDecl, Identifier, Indent,
    LVal, LocatedExpr, LocatedLVal, LocatedType, Program, RecordTypeDecl, Render, SourceLocation,
    Span, Stmt, Type, UnaryOp, Unparser, VarDecl,
};

/// A span on line 1 covering `len` columns starting at `column`; the end
/// column is exclusive
pub fn at(column: usize, len: usize) -> Span {
    Span::from_coords(1, column, 1, column + len)
}

pub fn loc(line: usize, column: usize) -> Span {
    Span::single(SourceLocation::new(line, column))
}

pub fn ident(name: &str) -> Identifier {
    Identifier::new(name, Span::zero()).expect("test identifier should be legal")
}

pub fn var(name: &str) -> LocatedLVal {
    LVal::id(ident(name))
}

pub fn field(base: LocatedLVal, name: &str) -> LocatedLVal {
    LVal::field_access(base, ident(name))
}

pub fn id(name: &str) -> LocatedExpr {
    Expr::id(ident(name))
}

pub fn int(value: u64) -> LocatedExpr {
    Expr::int_lit(value, Span::zero())
}

pub fn string(lexeme: &str) -> LocatedExpr {
    Expr::str_lit(lexeme, Span::zero()).expect("test lexeme should not be empty")
}

pub fn bin(op: BinaryOp, left: LocatedExpr, right: LocatedExpr) -> LocatedExpr {
    Expr::binary(op, left, right)
}

pub fn call(callee: &str, args: Vec<LocatedExpr>) -> CallExpr {
    CallExpr::new(ident(callee), args, Span::zero())
}

pub fn int_ty() -> LocatedType {
    Type::int(Span::zero())
}

pub fn bool_ty() -> LocatedType {
    Type::bool(Span::zero())
}

pub fn void_ty() -> LocatedType {
    Type::void(Span::zero())
}

pub fn string_ty() -> LocatedType {
    Type::string(Span::zero())
}

pub fn record_ty(name: &str) -> LocatedType {
    Type::record(ident(name))
}

pub fn var_decl(ty: LocatedType, name: &str) -> VarDecl {
    VarDecl::new(ty, ident(name), Span::zero())
}

pub fn formal(ty: LocatedType, name: &str) -> FormalDecl {
    FormalDecl::new(ty, ident(name))
}

pub fn assign(target: LocatedLVal, value: LocatedExpr) -> Stmt {
    Stmt::assign(AssignExpr::new(target, value), Span::zero())
}

pub fn report(value: LocatedExpr) -> Stmt {
    Stmt::report(value, Span::zero())
}

pub fn ret(value: Option<LocatedExpr>) -> Stmt {
    Stmt::ret(value, Span::zero())
}

pub fn while_loop(condition: LocatedExpr, body: Vec<Stmt>) -> Stmt {
    Stmt::while_loop(condition, body, Span::zero())
}

pub fn function(
    ret: LocatedType,
    name: &str,
    params: Vec<FormalDecl>,
    body: Vec<Stmt>,
) -> FnDecl {
    FnDecl::new(ret, ident(name), params, body, Span::zero())
        .expect("test function should be well formed")
}

pub fn record(name: &str, fields: Vec<VarDecl>) -> RecordTypeDecl {
    RecordTypeDecl::new(ident(name), fields, Span::zero())
}

pub fn program<I>(globals: I) -> Program
where
    I: IntoIterator<Item = Decl>,
{
    Program::new(globals.into_iter().collect())
}

/// Render with the default configuration (tab indentation)
pub fn render_default(program: &Program) -> String {
    cshanty::render_to_string(program).expect("render into a String should not fail")
}

/// Render with four-space indentation, which keeps inline snapshots readable
pub fn render_spaces(program: &Program) -> String {
    let mut out = String::new();
    let config = Config::default().with_indent(Indent::Spaces(4));
    cshanty::render_with_config(program, &mut out, &config)
        .expect("render into a String should not fail");
    out
}

/// Render any node at `indent` with the default configuration
pub fn render_node<N: Render>(node: &N, indent: usize) -> String {
    let mut out = String::new();
    Unparser::new(&mut out)
        .emit(node, indent)
        .expect("render into a String should not fail");
    out
}

/// The `add` function used by several tests:
/// `int add(int a, int b) { return (a + b); }`
pub fn add_function() -> FnDecl {
    function(
        int_ty(),
        "add",
        vec![formal(int_ty(), "a"), formal(int_ty(), "b")],
        vec![ret(Some(bin(BinaryOp::Add, id("a"), id("b"))))],
    )
}

/// `n` nested `neg` operators around the literal `1`
pub fn neg_chain(n: usize) -> LocatedExpr {
    let mut expr = int(1);
    for _ in 0..n {
        expr = Expr::unary(UnaryOp::Neg, expr, Span::zero());
    }
    expr
}

/// Runs `f` on a thread with a 2 MiB stack, the default for spawned
/// threads, and propagates its panic
pub fn on_small_stack<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    let handle = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(f)
        .expect("thread should spawn");

    if let Err(panic) = handle.join() {
        std::panic::resume_unwind(panic);
    }
}
