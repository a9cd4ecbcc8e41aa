use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Composite coordinate of one widget's state: the enclosing form plus the
/// widget id, which is only unique within that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    pub form_id: String,
    pub widget_id: String,
}

impl StateKey {
    pub fn new(form_id: impl Into<String>, widget_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            widget_id: widget_id.into(),
        }
    }
}

/// Current value of one widget's state cell.
///
/// The untagged representation matches what the session layer submits:
/// `Null` for an untouched optional field, `Json` for opaque ceremony
/// payloads forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Null,
    Flag(bool),
    Text(String),
    List(Vec<String>),
    Json(Value),
}

impl StateValue {
    pub fn text(value: impl Into<String>) -> Self {
        StateValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StateValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StateValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            StateValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StateValue::Null)
    }
}
