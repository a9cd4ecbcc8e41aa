//! screen-flow - Client-side engine for server-driven authentication screens
//!
//! This crate turns declarative screens of authentication widgets into live
//! interactive state: it decodes the widget schema, binds per-widget state
//! cells, realizes widgets into paintable control descriptions, drives form
//! submissions, and orchestrates WebAuthn/passkey credential ceremonies
//! against a platform provider.

mod ceremony;
mod config;
mod controller;
mod messages;
mod render;
mod schema;
mod session;
mod state;
mod utils;

#[cfg(test)]
mod test_utils;

pub use controller::LoginController;

pub use ceremony::{CeremonyFailure, CeremonyOutcome, CredentialProvider, ProviderFailure};

pub use messages::Messages;

pub use render::{
    Autocomplete, ButtonControl, ButtonStyle, CeremonyKind, ChoiceEntry, Control, InputMode,
    Markup, RenderedWidget, TextField, compose_date, split_date,
};

pub use schema::{
    AssertionCeremonyOptions, AuthenticatorSelection, CeremonyHint, CeremonyNotification,
    CeremonyRender, CeremonyUser, CheckboxRender, CheckboxValidator, CheckboxWidget, ChoiceOption,
    CreationCeremonyOptions, CredentialDescriptor, CredentialParameter, DateRender, DateValidator,
    DateWidget, Form, InputRender, InputValidator, InputWidget, MultiSelectValidator,
    MultiSelectWidget, PasscodeValidator, PasscodeWidget, PasskeyEnrollWidget, PasskeyLoginWidget,
    PasswordValidator, PasswordWidget, PhoneValidator, PhoneWidget, RelyingParty, Screen,
    SelectRender, SelectValidator, SelectWidget, StaticRender, StaticWidget, SubmitHint,
    SubmitRender, SubmitWidget, UnrecognizedWidget, WebauthnEnrollWidget, WebauthnLoginWidget,
    Widget, flatten_options,
};

pub use session::{FlowError, SessionAdapter};

pub use state::{StateCell, StateKey, StateStore, StateValue};
