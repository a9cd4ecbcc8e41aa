//! Declarative widget schema delivered by the login session layer.
//!
//! A [`Screen`] is one authentication step: an ordered list of [`Form`]s,
//! each an ordered list of [`Widget`]s. The JSON shape of these types is the
//! external contract with the server and must stay tolerant: an unknown
//! widget kind decodes to [`Widget::Unrecognized`] instead of failing the
//! whole screen.

mod options;
mod screen;
mod widget;

pub use options::{ChoiceOption, flatten_options};
pub use screen::{Form, Screen};
pub use widget::{
    AssertionCeremonyOptions, AuthenticatorSelection, CeremonyHint, CeremonyNotification,
    CeremonyRender, CeremonyUser, CheckboxRender, CheckboxValidator, CheckboxWidget,
    CredentialDescriptor, CredentialParameter, CreationCeremonyOptions, DateRender, DateValidator,
    DateWidget, InputRender, InputValidator, InputWidget, MultiSelectValidator, MultiSelectWidget,
    PasscodeValidator, PasscodeWidget, PasskeyEnrollWidget, PasskeyLoginWidget, PasswordValidator,
    PasswordWidget, PhoneValidator, PhoneWidget, RelyingParty, SelectRender, SelectValidator,
    SelectWidget, StaticRender, StaticWidget, SubmitHint, SubmitRender, SubmitWidget,
    UnrecognizedWidget, WebauthnEnrollWidget, WebauthnLoginWidget, Widget,
};
