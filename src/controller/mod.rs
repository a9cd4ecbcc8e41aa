//! The engine's host-facing surface.
//!
//! One [`LoginController`] lives per authentication session. It owns the
//! state store, consumes the session observables, drives submissions and
//! credential ceremonies, and realizes widgets into paintable controls.

mod resume;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::watch;

use crate::ceremony::{CeremonyOutcome, CredentialProvider, run_assertion, run_creation};
use crate::render::{RenderedWidget, render_widget};
use crate::schema::{Screen, Widget};
use crate::session::{FlowError, SessionAdapter};
use crate::state::{StateCell, StateKey, StateStore, StateValue};

/// Drives one authentication flow: binds widget state, submits forms, and
/// runs credential ceremonies against the platform provider.
///
/// All methods take `&self`; the controller is shared behind an `Arc` by
/// hosts that render and submit from different tasks.
pub struct LoginController {
    session: Arc<dyn SessionAdapter>,
    provider: Arc<dyn CredentialProvider>,
    store: StateStore,
    notice: watch::Sender<Option<String>>,
}

impl LoginController {
    pub fn new(session: Arc<dyn SessionAdapter>, provider: Arc<dyn CredentialProvider>) -> Self {
        Self {
            session,
            provider,
            store: StateStore::new(),
            notice: watch::channel(None).0,
        }
    }

    /// The session collaborator this controller drives.
    pub fn session(&self) -> &dyn SessionAdapter {
        self.session.as_ref()
    }

    /// The state cell for one widget coordinate. First access installs
    /// `default`; every later call shares the same cell.
    pub fn state_for(&self, form_id: &str, widget_id: &str, default: StateValue) -> StateCell {
        self.store.state_for(form_id, widget_id, default)
    }

    /// The field message the last submission addressed to one widget.
    pub fn error_message_for_widget(&self, form_id: &str, widget_id: &str) -> Option<String> {
        self.session
            .current_messages()
            .borrow()
            .as_ref()
            .and_then(|messages| messages.for_widget(form_id, widget_id))
            .map(str::to_string)
    }

    /// True while a submission or ceremony is in flight.
    pub fn is_processing(&self) -> bool {
        *self.session.processing().borrow()
    }

    /// Realizes one widget into a paintable control description.
    ///
    /// `None` means the combination is unrenderable and the fallback has
    /// already been reported to the session.
    pub fn render(
        &self,
        screen: &Screen,
        widget: &Widget,
        form_id: &str,
        widget_id: &str,
    ) -> Option<RenderedWidget> {
        render_widget(self, screen, widget, form_id, widget_id)
    }

    /// Realizes every widget of one form, in declaration order.
    pub fn render_form(&self, screen: &Screen, form_id: &str) -> Vec<RenderedWidget> {
        let Some(form) = screen.form(form_id) else {
            tracing::warn!(form = form_id, "screen carries no such form");
            return Vec::new();
        };
        form.widgets
            .iter()
            .filter_map(|widget| self.render(screen, widget, form_id, widget.id()))
            .collect()
    }

    /// Current values of one form's cells, keyed for submission.
    pub fn snapshot(&self, form_id: &str) -> HashMap<StateKey, StateValue> {
        self.store.snapshot(form_id)
    }

    /// Submits one form's state snapshot.
    ///
    /// Cancellation is silent: the store and the active messages are left
    /// exactly as they were, so the form can simply be resubmitted. Other
    /// failures additionally surface through the notice channel.
    pub async fn submit(&self, form_id: &str) -> Result<(), FlowError> {
        self.clear_notice();
        let values = self.store.snapshot(form_id);
        tracing::debug!(form = form_id, fields = values.len(), "submitting form");

        match self.session.submit(form_id, values).await {
            Ok(()) => Ok(()),
            Err(FlowError::Canceled) => {
                tracing::debug!(form = form_id, "submission canceled by user");
                Err(FlowError::Canceled)
            }
            Err(e) => {
                tracing::warn!(form = form_id, error = %e, "submission failed");
                self.publish_notice(e.user_text());
                Err(e)
            }
        }
    }

    /// Runs the credential ceremony a widget carries and, on success,
    /// writes the opaque payload into the widget's cell and auto-submits
    /// the enclosing form.
    ///
    /// Cancellation mutates nothing and shows nothing; the ceremony can be
    /// retried. Classified failures surface only through the notice
    /// channel with their generic user message.
    pub async fn run_ceremony(&self, form_id: &str, widget: &Widget) -> Result<(), FlowError> {
        let outcome = match widget {
            Widget::PasskeyEnroll(w) => {
                run_creation(self.provider.as_ref(), &w.enroll_options).await
            }
            Widget::WebauthnEnroll(w) => {
                run_creation(self.provider.as_ref(), &w.enroll_options).await
            }
            Widget::PasskeyLogin(w) => {
                run_assertion(self.provider.as_ref(), &w.assertion_options).await
            }
            Widget::WebauthnLogin(w) => {
                run_assertion(self.provider.as_ref(), &w.assertion_options).await
            }
            other => {
                tracing::warn!(widget = other.id(), "widget carries no credential ceremony");
                self.session.trigger_fallback();
                return Ok(());
            }
        };

        match outcome {
            CeremonyOutcome::Completed(payload) => {
                self.store
                    .state_for(form_id, widget.id(), StateValue::Null)
                    .set(StateValue::Json(payload));
                self.submit(form_id).await
            }
            CeremonyOutcome::Cancelled => Ok(()),
            CeremonyOutcome::Failed(failure) => {
                self.publish_notice(failure.user_message());
                Ok(())
            }
        }
    }

    /// Discards all widget state. Called when a new screen arrives; widget
    /// identity does not survive a screen swap.
    pub fn reset_for_new_screen(&self) {
        self.store.reset();
        self.clear_notice();
    }

    /// Transient flow-wide notices: ceremony failures and submission
    /// errors. Replaced wholesale; `None` clears the surface.
    pub fn notice(&self) -> watch::Receiver<Option<String>> {
        self.notice.subscribe()
    }

    pub fn publish_notice(&self, text: impl Into<String>) {
        self.notice.send_replace(Some(text.into()));
    }

    pub fn clear_notice(&self) {
        self.notice.send_if_modified(|current| current.take().is_some());
    }
}
