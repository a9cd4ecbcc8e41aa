/// A widget realized for painting, with the field message (if any) that
/// the last submission addressed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWidget {
    pub control: Control,
    pub error_message: Option<String>,
}

/// Toolkit-independent description of one interactive control.
///
/// Current values come from the widget's bound state cell at render time;
/// the host paints the control and writes user edits back through
/// `state_for`.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Nested form group; children are bound under the nested form's id.
    Group {
        form_id: String,
        children: Vec<RenderedWidget>,
    },
    StaticText {
        markup: Markup,
        text: String,
    },
    TextField(TextField),
    Checkbox {
        label: String,
        label_markup: Markup,
        checked: bool,
        /// False for consent boxes the server wants accepted invisibly.
        visible: bool,
        disabled: bool,
    },
    RadioGroup {
        label: Option<String>,
        entries: Vec<ChoiceEntry>,
        selected: Option<String>,
        disabled: bool,
    },
    Dropdown {
        label: Option<String>,
        entries: Vec<ChoiceEntry>,
        selected_value: Option<String>,
        /// Re-derived from the flattened entries on every render; blank
        /// when the selected value no longer appears among them.
        selected_label: Option<String>,
        disabled: bool,
    },
    Checklist {
        label: String,
        entries: Vec<ChoiceEntry>,
        selected: Vec<String>,
        disabled: bool,
    },
    /// Single date value edited through a host-native picker.
    DateField {
        label: Option<String>,
        placeholder: Option<String>,
        value: Option<String>,
        disabled: bool,
    },
    /// Year/month/day entry; the composed value only forms once all three
    /// parts make a valid date.
    DateFieldSet {
        label: Option<String>,
        year: String,
        month: String,
        day: String,
        disabled: bool,
    },
    Button(ButtonControl),
    /// Self-submitting credential ceremony trigger.
    CeremonyButton {
        label: String,
        kind: CeremonyKind,
        disabled: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub label: String,
    pub value: String,
    pub secret: bool,
    pub input_mode: InputMode,
    pub autocomplete: Autocomplete,
    pub readonly: bool,
    pub disabled: bool,
    /// Show a password strength meter next to the field.
    pub quality_indicator: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonControl {
    pub label: String,
    pub style: ButtonStyle,
    pub text_color: Option<String>,
    pub bg_color: Option<String>,
    pub icon: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Button,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Email,
    Numeric,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autocomplete {
    None,
    Username,
    OneTimeCode,
    PhoneNumber,
}

/// One selectable leaf of a flattened option tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyKind {
    PasskeyLogin,
    PasskeyEnroll,
    WebauthnLogin,
    WebauthnEnroll,
}
