//! Type annotation rendering

use super::utils::Step;
use crate::ast::LocatedType;

/// Primitive keyword, or the bare name of a record type
pub(super) fn type_steps(ty: &LocatedType) -> Vec<Step<'_>> {
    vec![Step::Text(ty.node().name())]
}
