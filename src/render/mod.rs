//! Headless realization of widgets into paintable control descriptions.
//!
//! The dispatch engine maps each (widget kind, render sub-type) pair onto
//! a [`Control`] the host toolkit knows how to paint, binding state cells
//! and attaching correlated field messages along the way. Combinations it
//! does not recognize take the fallback path: reported to the session,
//! never a panic.

mod control;
mod engine;

pub use control::{
    Autocomplete, ButtonControl, ButtonStyle, CeremonyKind, ChoiceEntry, Control, InputMode,
    Markup, RenderedWidget, TextField,
};
pub use engine::{compose_date, split_date};

pub(crate) use engine::render_widget;
