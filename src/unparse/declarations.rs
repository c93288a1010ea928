//! Declaration rendering
//!
//! Covers the program root, global and local variables, function
//! parameters, functions and record types.

use super::formatting::{block, separated};
use super::utils::{Item, Step};
use crate::ast::*;

pub(super) fn program_steps(program: &Program, indent: usize) -> Vec<Step<'_>> {
    log::trace!(
        "rendering program with {} declaration(s) spanning {}",
        program.globals().len(),
        program.span()
    );

    program
        .globals()
        .iter()
        .map(|decl| {
            log::trace!("queued {} `{}`", decl.kind(), decl.name());
            Step::Enter(decl.into(), indent)
        })
        .collect()
}

/// `<type> <name>;` on its own line
pub(super) fn var_decl_steps(decl: &VarDecl, indent: usize) -> Vec<Step<'_>> {
    vec![
        Step::Indent(indent),
        Step::Enter(Item::Type(decl.ty()), 0),
        Step::Text(" "),
        Step::Text(decl.name().name()),
        Step::Text(";\n"),
    ]
}

/// `<type> <name>`, no terminator
pub(super) fn formal_decl_steps(decl: &FormalDecl) -> Vec<Step<'_>> {
    vec![
        Step::Enter(Item::Type(decl.ty()), 0),
        Step::Text(" "),
        Step::Text(decl.name().name()),
    ]
}

pub(super) fn fn_decl_steps(decl: &FnDecl, indent: usize) -> Vec<Step<'_>> {
    let mut steps = vec![
        Step::Indent(indent),
        Step::Enter(Item::Type(decl.return_type()), 0),
        Step::Text(" "),
        Step::Text(decl.name().name()),
        Step::Text("("),
    ];
    steps.extend(separated(decl.params()));
    steps.push(Step::Text(") "));
    steps.extend(block(decl.body(), indent));
    steps
}

pub(super) fn record_steps(decl: &RecordTypeDecl, indent: usize) -> Vec<Step<'_>> {
    let mut steps = vec![
        Step::Indent(indent),
        Step::Text("record "),
        Step::Text(decl.name().name()),
        Step::Text(" "),
    ];
    steps.extend(block(decl.fields(), indent));
    steps
}
