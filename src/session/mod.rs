//! Contract with the session collaborator that owns the network flow.
//!
//! The engine consumes this interface; it never implements it. Token
//! exchange, redirect capture, and screen fetching all live behind it.

mod errors;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::messages::Messages;
use crate::schema::Screen;
use crate::state::{StateKey, StateValue};

pub use errors::FlowError;

/// The session layer driving the authentication flow.
///
/// The three observables are owned by the session and replaced wholesale
/// per step; `submit` and `continue_flow` are the engine's only suspension
/// points besides the credential ceremony.
#[async_trait]
pub trait SessionAdapter: Send + Sync {
    /// Latest declarative step, or `None` before the flow starts.
    fn current_screen(&self) -> watch::Receiver<Option<Screen>>;

    /// Latest submission feedback; replaced atomically per submission.
    fn current_messages(&self) -> watch::Receiver<Option<Messages>>;

    /// True while a submission or ceremony is in flight. Controls must
    /// render disabled while set.
    fn processing(&self) -> watch::Receiver<bool>;

    /// Sends one form's state snapshot. The response arrives out-of-band
    /// through the observables (a new screen, messages, or a terminal
    /// profile handled by the host).
    async fn submit(
        &self,
        form_id: &str,
        values: HashMap<StateKey, StateValue>,
    ) -> Result<(), FlowError>;

    /// Resumes a pending redirect-based step with the captured URI, if any.
    async fn continue_flow(&self, redirect_uri: Option<String>) -> Result<(), FlowError>;

    /// Reports that a screen or widget combination cannot be rendered and
    /// the host should degrade. Non-fatal by contract.
    fn trigger_fallback(&self);

    /// Whether the flow is currently waiting on an external redirect.
    fn is_redirect_expected(&self) -> bool;
}
