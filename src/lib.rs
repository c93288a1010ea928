pub mod ast;
pub mod config;
pub mod error;
pub mod span;
pub mod unparse;

pub use ast::*;
pub use config::*;
pub use error::{ErrorFormatter, ErrorKind, Result, ShantyError};
pub use span::*;
pub use unparse::{render, render_io, render_to_string, render_with_config, Render, Unparser};
