//! Layout of brace-delimited bodies and comma-separated lists

use super::utils::{Item, Step};

/// `{`, each item at `indent + 1`, then `}` back at `indent`. An empty
/// body still gets a line of its own between the braces.
pub(super) fn block<'t, T>(items: &'t [T], indent: usize) -> Vec<Step<'t>>
where
    &'t T: Into<Item<'t>>,
{
    let mut steps = Vec::with_capacity(items.len() + 4);
    steps.push(Step::Text("{\n"));

    if items.is_empty() {
        steps.push(Step::Text("\n"));
    }

    steps.extend(items.iter().map(|item| Step::Enter(item.into(), indent + 1)));
    steps.push(Step::Indent(indent));
    steps.push(Step::Text("}\n"));
    steps
}

/// Items at indent 0, joined with `, `
pub(super) fn separated<'t, T>(items: &'t [T]) -> Vec<Step<'t>>
where
    &'t T: Into<Item<'t>>,
{
    let mut steps = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            steps.push(Step::Text(", "));
        }
        steps.push(Step::Enter(item.into(), 0));
    }
    steps
}
