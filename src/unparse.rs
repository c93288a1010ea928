//! Canonical source reconstruction from the AST.
//!
//! Every node kind has exactly one rendering. Indentation is a by-value
//! parameter carried with each pending node; expressions ignore it and only
//! statement- and declaration-level nodes emit leading indentation. Nodes
//! are expanded from an explicit work list rather than by recursion, so
//! rendering never grows the call stack. The only state the `Unparser`
//! keeps is the sink, the configuration and the current nesting depth,
//! which is capped by `Config::max_depth`.

mod declarations;
mod expressions;
mod formatting;
mod statements;
mod types;
mod utils;

use crate::ast::*;
use crate::config::Config;
use crate::error::{Result, ShantyError};
use std::fmt;
use std::io;

/// Walks a tree and appends its canonical text to a sink
pub struct Unparser<'w, W: fmt::Write + ?Sized> {
    out: &'w mut W,
    config: Config,
    indent_unit: String,
    depth: usize,
}

impl<'w, W: fmt::Write + ?Sized> Unparser<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self::with_config(out, Config::default())
    }

    pub fn with_config(out: &'w mut W, config: Config) -> Self {
        let indent_unit = config.indent.unit();
        Self {
            out,
            config,
            indent_unit,
            depth: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `node` at `indent`. On failure the sink keeps whatever was
    /// already written.
    pub fn emit<N: Render + ?Sized>(&mut self, node: &N, indent: usize) -> Result<()> {
        let saved_depth = self.depth;
        let result = node.render_with(self, indent);
        self.depth = saved_depth;
        if let Err(err) = &result {
            log::debug!("render aborted: {}", err);
        }
        result
    }
}

/// The single externally visible operation every node supports
pub trait Render {
    fn render_with<W: fmt::Write + ?Sized>(
        &self,
        unparser: &mut Unparser<'_, W>,
        indent: usize,
    ) -> Result<()>;

    /// Render with the default configuration
    fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W, indent: usize) -> Result<()> {
        Unparser::new(sink).emit(self, indent)
    }
}

/// Render a whole program at indent 0 with the default configuration
pub fn render<W: fmt::Write + ?Sized>(program: &Program, sink: &mut W) -> Result<()> {
    render_with_config(program, sink, &Config::default())
}

pub fn render_with_config<W: fmt::Write + ?Sized>(
    program: &Program,
    sink: &mut W,
    config: &Config,
) -> Result<()> {
    Unparser::with_config(sink, config.clone()).emit(program, 0)
}

pub fn render_to_string(program: &Program) -> Result<String> {
    let mut output = String::new();
    render(program, &mut output)?;
    Ok(output)
}

/// Render into a byte sink. The `io::Error` that stopped the render, if any,
/// is what the returned error describes.
pub fn render_io<W: io::Write>(program: &Program, sink: W) -> Result<()> {
    let mut adapter = IoAdapter {
        inner: sink,
        error: None,
    };

    match render(program, &mut adapter) {
        Ok(()) => {
            adapter.inner.flush()?;
            Ok(())
        }
        Err(err) => Err(match adapter.error.take() {
            Some(io_err) => ShantyError::from(io_err),
            None => err,
        }),
    }
}

struct IoAdapter<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

macro_rules! render_via_work_list {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render_with<W: fmt::Write + ?Sized>(
                    &self,
                    unparser: &mut Unparser<'_, W>,
                    indent: usize,
                ) -> Result<()> {
                    unparser.run(self.into(), indent)
                }
            }
        )*
    };
}

render_via_work_list!(
    Program,
    Decl,
    VarDecl,
    FormalDecl,
    FnDecl,
    RecordTypeDecl,
    Stmt,
    LocatedExpr,
    CallExpr,
    AssignExpr,
    LocatedLVal,
    Identifier,
    LocatedType,
);

macro_rules! display_via_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.render(f, 0).map_err(|_| fmt::Error)
                }
            }
        )*
    };
}

display_via_render!(Program, LocatedExpr, LocatedLVal, LocatedType, Stmt, Decl);
