use serde::{Deserialize, Serialize};

use crate::config::OPTION_MAX_DEPTH;

/// One entry in a choice widget's option tree: either a selectable leaf or
/// a labeled group of nested options. Groups may nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChoiceOption {
    Item {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    Group {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        options: Vec<ChoiceOption>,
    },
}

impl ChoiceOption {
    pub fn label(&self) -> Option<&str> {
        match self {
            ChoiceOption::Item { label, .. } => label.as_deref(),
            ChoiceOption::Group { label, .. } => label.as_deref(),
        }
    }

    /// The submittable value; groups have none.
    pub fn value(&self) -> Option<&str> {
        match self {
            ChoiceOption::Item { value, .. } => value.as_deref(),
            ChoiceOption::Group { .. } => None,
        }
    }
}

/// Flattens a nested option tree into the ordered leaf list.
///
/// Depth-first: a group contributes its recursively expanded leaves in
/// place and is never emitted itself. Order of first encounter is
/// preserved and leaves are not deduplicated. The source is a tree by
/// construction, but recursion stops at [`OPTION_MAX_DEPTH`] so a
/// pathological payload cannot overflow the stack.
pub fn flatten_options(options: &[ChoiceOption]) -> Vec<ChoiceOption> {
    let mut flat = Vec::new();
    flatten_into(options, 0, &mut flat);
    flat
}

fn flatten_into(options: &[ChoiceOption], depth: usize, out: &mut Vec<ChoiceOption>) {
    if depth >= *OPTION_MAX_DEPTH {
        tracing::warn!(depth, "choice option nesting exceeds ceiling; dropping branch");
        return;
    }
    for option in options {
        match option {
            ChoiceOption::Item { .. } => out.push(option.clone()),
            ChoiceOption::Group { options, .. } => flatten_into(options, depth + 1, out),
        }
    }
}
