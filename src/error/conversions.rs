//! Conversions from sink failures into `ShantyError`

use super::{ErrorKind, ShantyError};
use std::fmt;
use std::io;

/// A `fmt::Write` sink refused more output
impl From<fmt::Error> for ShantyError {
    fn from(_: fmt::Error) -> Self {
        ShantyError::new(ErrorKind::IoError, "sink write failed")
    }
}

impl From<io::Error> for ShantyError {
    fn from(err: io::Error) -> Self {
        ShantyError::new(ErrorKind::IoError, err.to_string()).with_note(format!("{:?}", err.kind()))
    }
}
