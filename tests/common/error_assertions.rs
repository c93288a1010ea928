//! Error assertion utilities for more precise error testing

use cshanty::{ErrorKind, NodeKind, ShantyError};

/// Assert that an error has a specific kind
pub fn assert_error_kind(error: &ShantyError, expected_kind: ErrorKind) {
    if error.kind != expected_kind {
        panic!(
            "Expected error kind {:?}, but got {:?}",
            expected_kind, error.kind
        );
    }
}

/// Assert that an error message contains a substring
pub fn assert_error_contains(error: &ShantyError, substring: &str) {
    if !error.message.contains(substring) {
        panic!(
            "Expected error message to contain '{}', but got: '{}'",
            substring, error.message
        );
    }
}

/// Assert that an error names a specific node kind
pub fn assert_error_node(error: &ShantyError, expected: NodeKind) {
    match error.node() {
        Some(node) if node == expected => {}
        Some(node) => panic!("Expected error on {:?}, but it names {:?}", expected, node),
        None => panic!("Expected error on {:?}, but it names no node", expected),
    }
}

/// Assert that an error has a specific location
pub fn assert_error_location(error: &ShantyError, line: usize, column: usize) {
    if let Some(span) = &error.context.span {
        if span.start.line != line || span.start.column != column {
            panic!(
                "Expected error at {}:{}, but got {}:{}",
                line, column, span.start.line, span.start.column
            );
        }
    } else {
        panic!(
            "Expected error to have location {}:{}, but it has no span",
            line, column
        );
    }
}

/// Fluent assertion builder for errors
pub struct ErrorAssertion<'a> {
    error: &'a ShantyError,
    failed: bool,
    failures: Vec<String>,
}

impl<'a> ErrorAssertion<'a> {
    /// Start a fluent assertion chain
    pub fn assert_that(error: &'a ShantyError) -> Self {
        ErrorAssertion {
            error,
            failed: false,
            failures: Vec::new(),
        }
    }

    pub fn has_kind(mut self, expected: ErrorKind) -> Self {
        if self.error.kind != expected {
            self.failed = true;
            self.failures.push(format!(
                "Expected error kind {:?}, but got {:?}",
                expected, self.error.kind
            ));
        }
        self
    }

    pub fn on_node(mut self, expected: NodeKind) -> Self {
        if self.error.node() != Some(expected) {
            self.failed = true;
            self.failures.push(format!(
                "Expected error on {:?}, but got {:?}",
                expected,
                self.error.node()
            ));
        }
        self
    }

    pub fn has_message_containing(mut self, substring: &str) -> Self {
        if !self.error.message.contains(substring) {
            self.failed = true;
            self.failures.push(format!(
                "Expected message to contain '{}', but got: '{}'",
                substring, self.error.message
            ));
        }
        self
    }

    /// Assert error is at specific location
    pub fn at_location(mut self, line: usize, column: usize) -> Self {
        if let Some(span) = &self.error.context.span {
            if span.start.line != line || span.start.column != column {
                self.failed = true;
                self.failures.push(format!(
                    "Expected location {}:{}, but got {}:{}",
                    line, column, span.start.line, span.start.column
                ));
            }
        } else {
            self.failed = true;
            self.failures.push(format!(
                "Expected location {}:{}, but error has no span",
                line, column
            ));
        }
        self
    }

    pub fn has_help_containing(mut self, substring: &str) -> Self {
        match &self.error.context.help {
            Some(help) if help.contains(substring) => {}
            Some(help) => {
                self.failed = true;
                self.failures.push(format!(
                    "Expected help to contain '{}', but got: '{}'",
                    substring, help
                ));
            }
            None => {
                self.failed = true;
                self.failures
                    .push("Expected help text, but error has none".to_string());
            }
        }
        self
    }
}

impl<'a> Drop for ErrorAssertion<'a> {
    fn drop(&mut self) {
        if self.failed && !std::thread::panicking() {
            panic!("Error assertion failed:\n{}", self.failures.join("\n"));
        }
    }
}

/// Macro for concise error assertions
#[macro_export]
macro_rules! assert_error {
    ($result:expr, $kind:expr) => {
        match $result {
            Ok(_) => panic!("Expected error, but got Ok"),
            Err(ref e) => $crate::common::error_assertions::assert_error_kind(e, $kind),
        }
    };

    ($result:expr, $kind:expr, $msg:expr) => {
        match $result {
            Ok(_) => panic!("Expected error, but got Ok"),
            Err(ref e) => {
                $crate::common::error_assertions::assert_error_kind(e, $kind);
                $crate::common::error_assertions::assert_error_contains(e, $msg);
            }
        }
    };

    ($result:expr, $kind:expr, $msg:expr, at: ($line:expr, $col:expr)) => {
        match $result {
            Ok(_) => panic!("Expected error, but got Ok"),
            Err(ref e) => {
                $crate::common::error_assertions::assert_error_kind(e, $kind);
                $crate::common::error_assertions::assert_error_contains(e, $msg);
                $crate::common::error_assertions::assert_error_location(e, $line, $col);
            }
        }
    };
}
