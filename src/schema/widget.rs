use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::state::StateValue;

use super::options::ChoiceOption;
use super::screen::Form;

/// One declarative UI/behavior unit within a form.
///
/// The variant is picked by the server-controlled `type` discriminator.
/// The set of known kinds is closed, but the wire schema is open-ended:
/// anything the server sends with a discriminator we do not recognize (or a
/// recognized discriminator whose payload no longer decodes) becomes
/// [`Widget::Unrecognized`] so the dispatch engine can degrade that one
/// widget instead of rejecting the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Form(Form),
    Submit(SubmitWidget),
    Static(StaticWidget),
    Input(InputWidget),
    Checkbox(CheckboxWidget),
    Password(PasswordWidget),
    Select(SelectWidget),
    MultiSelect(MultiSelectWidget),
    Passcode(PasscodeWidget),
    Phone(PhoneWidget),
    Date(DateWidget),
    PasskeyLogin(PasskeyLoginWidget),
    PasskeyEnroll(PasskeyEnrollWidget),
    WebauthnLogin(WebauthnLoginWidget),
    WebauthnEnroll(WebauthnEnrollWidget),
    Unrecognized(UnrecognizedWidget),
}

impl Widget {
    /// Stable identifier, unique within the enclosing form.
    pub fn id(&self) -> &str {
        match self {
            Widget::Form(w) => &w.id,
            Widget::Submit(w) => &w.id,
            Widget::Static(w) => &w.id,
            Widget::Input(w) => &w.id,
            Widget::Checkbox(w) => &w.id,
            Widget::Password(w) => &w.id,
            Widget::Select(w) => &w.id,
            Widget::MultiSelect(w) => &w.id,
            Widget::Passcode(w) => &w.id,
            Widget::Phone(w) => &w.id,
            Widget::Date(w) => &w.id,
            Widget::PasskeyLogin(w) => &w.id,
            Widget::PasskeyEnroll(w) => &w.id,
            Widget::WebauthnLogin(w) => &w.id,
            Widget::WebauthnEnroll(w) => &w.id,
            Widget::Unrecognized(w) => &w.id,
        }
    }

    /// The value the server pre-filled for this widget, if the kind carries
    /// one. Used to seed the state store when the widget is first bound.
    pub fn declared_value(&self) -> Option<StateValue> {
        match self {
            Widget::Input(w) => w.value.clone().map(StateValue::Text),
            Widget::Phone(w) => w.value.clone().map(StateValue::Text),
            Widget::Date(w) => w.value.clone().map(StateValue::Text),
            Widget::Select(w) => w.value.clone().map(StateValue::Text),
            Widget::Checkbox(w) => Some(StateValue::Flag(w.value)),
            Widget::MultiSelect(w) => Some(StateValue::List(
                w.value.iter().flatten().cloned().collect(),
            )),
            _ => None,
        }
    }
}

// The discriminator lives in the payload itself, and unknown tags must not
// fail the surrounding screen, so decoding is a manual two-step: buffer the
// raw value, then dispatch on the tag.
impl<'de> Deserialize<'de> for Widget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let tag = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let decoded = match tag.as_str() {
            "form" => serde_json::from_value(raw.clone()).map(Widget::Form),
            "submit" => serde_json::from_value(raw.clone()).map(Widget::Submit),
            "static" => serde_json::from_value(raw.clone()).map(Widget::Static),
            "input" => serde_json::from_value(raw.clone()).map(Widget::Input),
            "checkbox" => serde_json::from_value(raw.clone()).map(Widget::Checkbox),
            "password" => serde_json::from_value(raw.clone()).map(Widget::Password),
            "select" => serde_json::from_value(raw.clone()).map(Widget::Select),
            "multiSelect" => serde_json::from_value(raw.clone()).map(Widget::MultiSelect),
            "passcode" => serde_json::from_value(raw.clone()).map(Widget::Passcode),
            "phone" => serde_json::from_value(raw.clone()).map(Widget::Phone),
            "date" => serde_json::from_value(raw.clone()).map(Widget::Date),
            "passkeyLogin" => serde_json::from_value(raw.clone()).map(Widget::PasskeyLogin),
            "passkeyEnroll" => serde_json::from_value(raw.clone()).map(Widget::PasskeyEnroll),
            "webauthnLogin" => serde_json::from_value(raw.clone()).map(Widget::WebauthnLogin),
            "webauthnEnroll" => serde_json::from_value(raw.clone()).map(Widget::WebauthnEnroll),
            _ => {
                tracing::debug!(tag = %tag, "unknown widget discriminator");
                return Ok(Widget::Unrecognized(UnrecognizedWidget::from_raw(tag, raw)));
            }
        };

        Ok(decoded.unwrap_or_else(|e| {
            tracing::warn!(tag = %tag, error = %e, "widget payload failed to decode");
            Widget::Unrecognized(UnrecognizedWidget::from_raw(tag, raw))
        }))
    }
}

/// A widget the engine cannot interpret. Carries the raw payload so a host
/// can log or inspect it; rendering it always takes the fallback path.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedWidget {
    pub id: String,
    pub kind: String,
    pub raw: Value,
}

impl UnrecognizedWidget {
    fn from_raw(kind: String, raw: Value) -> Self {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { id, kind, raw }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub render: Option<SubmitRender>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRender {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub hint: Option<SubmitHint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitHint {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaticWidget {
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub render: Option<StaticRender>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaticRender {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub autocomplete: Option<String>,
    #[serde(default)]
    pub inputmode: Option<String>,
    #[serde(default)]
    pub validator: Option<InputValidator>,
    #[serde(default)]
    pub render: Option<InputRender>,
}

/// Descriptive constraints echoed from the server. Never enforced locally;
/// bounds are stored verbatim for the host to display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValidator {
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRender {
    #[serde(default)]
    pub autocomplete_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub value: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub validator: Option<CheckboxValidator>,
    #[serde(default)]
    pub render: Option<CheckboxRender>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckboxValidator {
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxRender {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default = "default_label_type")]
    pub label_type: String,
}

fn default_label_type() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub quality_indicator: bool,
    #[serde(default)]
    pub validator: Option<PasswordValidator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordValidator {
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub max_numeric_character_sequences: Option<u32>,
    #[serde(default)]
    pub max_repeated_characters: Option<u32>,
    #[serde(default)]
    pub must_contain: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectWidget {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub render: Option<SelectRender>,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub validator: Option<SelectValidator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectValidator {
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectRender {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiSelectWidget {
    pub id: String,
    pub label: String,
    /// Pre-selected values; the server may include null entries.
    #[serde(default)]
    pub value: Vec<Option<String>>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub validator: Option<MultiSelectValidator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectValidator {
    #[serde(default)]
    pub min_selectable: u32,
    #[serde(default)]
    pub max_selectable: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasscodeWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub validator: Option<PasscodeValidator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasscodeValidator {
    #[serde(default)]
    pub length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhoneWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub validator: Option<PhoneValidator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhoneValidator {
    #[serde(default)]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateWidget {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub render: Option<DateRender>,
    #[serde(default)]
    pub validator: Option<DateValidator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateRender {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValidator {
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub not_before: Option<String>,
    #[serde(default)]
    pub not_after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyLoginWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub render: Option<CeremonyRender>,
    pub assertion_options: AssertionCeremonyOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyEnrollWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub render: Option<CeremonyRender>,
    pub enroll_options: CreationCeremonyOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebauthnLoginWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub render: Option<CeremonyRender>,
    pub assertion_options: AssertionCeremonyOptions,
    #[serde(default)]
    pub authenticator_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebauthnEnrollWidget {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub render: Option<CeremonyRender>,
    pub enroll_options: CreationCeremonyOptions,
    #[serde(default)]
    pub authenticator_type: String,
}

/// Render hints shared by the four ceremony widget kinds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CeremonyRender {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub hint: Option<CeremonyHint>,
    #[serde(default)]
    pub notification: Option<CeremonyNotification>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CeremonyHint {
    #[serde(default)]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CeremonyNotification {
    #[serde(default)]
    pub cancelled: Option<String>,
}

/// Parameters for a credential creation (enrollment) ceremony, following
/// the `navigator.credentials.create()` option shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationCeremonyOptions {
    pub rp: RelyingParty,
    pub user: CeremonyUser,
    pub challenge: String,
    #[serde(default)]
    pub pub_key_cred_params: Vec<CredentialParameter>,
    #[serde(default)]
    pub exclude_credentials: Vec<CredentialDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

/// Parameters for a credential assertion (login) ceremony, following the
/// `navigator.credentials.get()` option shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionCeremonyOptions {
    pub challenge: String,
    pub rp_id: String,
    #[serde(default)]
    pub allow_credentials: Vec<CredentialDescriptor>,
    #[serde(default)]
    pub user_verification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelyingParty {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialParameter {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialDescriptor {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}
