//! Error types for tree construction and rendering
//!
//! Structural problems are caught when a node is built and reported as
//! `InvalidTree` with the offending node kind and span. Rendering itself can
//! only fail on a sink write or when the recursion cap is reached.

mod conversions;

use crate::ast::NodeKind;
use crate::span::Span;
use colored::*;
use std::fmt;

/// Error context providing additional information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub node: Option<NodeKind>,
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            node: None,
            span: None,
            note: None,
            help: None,
        }
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Main error type for the cshanty front end core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShantyError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl ShantyError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    /// A structural-validity error for `node` at `span`
    pub fn invalid_tree(node: NodeKind, span: Span, message: impl Into<String>) -> Self {
        let error = Self::new(ErrorKind::InvalidTree, message)
            .with_node(node)
            .with_span(span);
        log::debug!("rejected {} at {}: {}", node, span, error.message);
        error
    }

    pub fn depth_exceeded(node: NodeKind, span: Span, limit: usize) -> Self {
        Self::new(
            ErrorKind::DepthExceeded,
            format!("nesting deeper than {} levels", limit),
        )
        .with_node(node)
        .with_span(span)
        .with_help("raise `Config::max_depth` or flatten the expression")
    }

    pub fn with_node(mut self, node: NodeKind) -> Self {
        self.context.node = Some(node);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    pub fn node(&self) -> Option<NodeKind> {
        self.context.node
    }

    pub fn span(&self) -> Option<Span> {
        self.context.span
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTree,
    DepthExceeded,
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidTree => "invalid tree",
            ErrorKind::DepthExceeded => "depth exceeded",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShantyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = &self.context.span {
            write!(f, "{}: ", span)?;
        }
        write!(f, "{}", self.kind)?;
        if let Some(node) = &self.context.node {
            write!(f, " ({})", node)?;
        }
        write!(f, ": {}", self.message)?;

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for ShantyError {}

/// Format error with source code snippet
pub struct ErrorFormatter<'a> {
    error: &'a ShantyError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a ShantyError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(span) = &self.error.context.span {
            let location = match self.filename {
                Some(filename) => format!("{}:{}:{}", filename, span.start.line, span.start.column),
                None => format!("{}:{}", span.start.line, span.start.column),
            };
            output.push_str(&self.paint(location, |s| s.bold()));
            output.push_str(": ");
        }

        let mut label = self.error.kind.to_string();
        if let Some(node) = &self.error.context.node {
            label = format!("{} ({})", label, node);
        }
        output.push_str(&self.paint(label, |s| s.red().bold()));
        output.push_str(&format!(": {}\n", self.error.message));

        if let Some(span) = &self.error.context.span {
            if let Some(snippet) = self.extract_snippet(span) {
                output.push_str(&snippet);
            }
        }

        if let Some(note) = &self.error.context.note {
            let note_label = self.paint("note".to_string(), |s| s.blue().bold());
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = self.paint("help".to_string(), |s| s.green().bold());
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }

    fn paint<F>(&self, text: String, style: F) -> String
    where
        F: FnOnce(&str) -> ColoredString,
    {
        if self.use_color {
            style(&text).to_string()
        } else {
            text
        }
    }

    fn extract_snippet(&self, span: &Span) -> Option<String> {
        let lines: Vec<&str> = self.source.lines().collect();

        // Line numbers are 1-based; 0 marks a span with no source text
        if span.start.line == 0 || span.start.line > lines.len() {
            return None;
        }

        let line = lines[span.start.line - 1];
        let line_num = span.start.line.to_string();
        let gutter_width = line_num.len() + 2;

        let mut snippet = String::new();
        snippet.push_str(&format!(
            "{} {} {}\n",
            self.paint(line_num.clone(), |s| s.blue().bold()),
            self.paint("|".to_string(), |s| s.blue()),
            line
        ));

        let pointer_padding = " ".repeat(span.start.column.saturating_sub(1));
        let pointer_length = if span.start.line == span.end.line {
            span.end.column.saturating_sub(span.start.column).max(1)
        } else {
            1
        };
        snippet.push_str(&format!(
            "{} {} {}{}",
            " ".repeat(gutter_width - 2),
            self.paint("|".to_string(), |s| s.blue()),
            pointer_padding,
            self.paint("^".repeat(pointer_length), |s| s.red().bold())
        ));

        Some(snippet)
    }
}

/// Result type for cshanty operations
pub type Result<T> = std::result::Result<T, ShantyError>;
