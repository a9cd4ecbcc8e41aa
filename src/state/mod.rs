//! Reactive per-widget state, keyed by a (form, widget) coordinate.

mod store;
mod types;

pub use store::{StateCell, StateStore};
pub use types::{StateKey, StateValue};
