//! Correlation of submission feedback onto widgets.

use std::collections::HashMap;

use crate::state::StateKey;

/// Feedback returned by one submission: either a single flow-wide message
/// or a set of field-scoped messages addressed by widget coordinate.
///
/// At most one `Messages` value is active at a time; the session layer
/// replaces it wholesale on every submission, which atomically invalidates
/// all previous field associations.
#[derive(Debug, Clone, PartialEq)]
pub enum Messages {
    Global(String),
    Field(HashMap<StateKey, String>),
}

impl Messages {
    pub fn global(text: impl Into<String>) -> Self {
        Messages::Global(text.into())
    }

    /// Convenience constructor for a single field-scoped message.
    pub fn field(form_id: &str, widget_id: &str, text: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(StateKey::new(form_id, widget_id), text.into());
        Messages::Field(fields)
    }

    pub fn fields(entries: impl IntoIterator<Item = (StateKey, String)>) -> Self {
        Messages::Field(entries.into_iter().collect())
    }

    /// The message to display next to one widget, if any.
    ///
    /// Only an exact `(form_id, widget_id)` match is returned. A global
    /// message never surfaces here; it is shown once, out-of-band.
    pub fn for_widget(&self, form_id: &str, widget_id: &str) -> Option<&str> {
        match self {
            Messages::Global(_) => None,
            Messages::Field(fields) => fields
                .get(&StateKey::new(form_id, widget_id))
                .map(String::as_str),
        }
    }

    /// The flow-wide message, if this value carries one.
    pub fn global_text(&self) -> Option<&str> {
        match self {
            Messages::Global(text) => Some(text),
            Messages::Field(_) => None,
        }
    }
}
