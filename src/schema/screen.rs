use serde::Deserialize;

use super::widget::Widget;

/// One declarative authentication step delivered by the session layer.
///
/// Screens are immutable snapshots; a new step always arrives as a whole
/// replacement, never as a partial update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Screen {
    #[serde(default)]
    pub forms: Vec<Form>,
}

impl Screen {
    /// Looks up a form by its identifier.
    pub fn form(&self, form_id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == form_id)
    }
}

/// A submission unit grouping related widgets.
///
/// The same shape appears both at the screen level and nested inside a
/// widget list (the server tags nested groups as `form` widgets).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Form {
    pub id: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}
