//! Shared mock collaborators for controller and ceremony tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::ceremony::{CredentialProvider, ProviderFailure};
use crate::messages::Messages;
use crate::schema::Screen;
use crate::session::{FlowError, SessionAdapter};
use crate::state::{StateKey, StateValue};

/// Scripted session collaborator that records every interaction.
pub(crate) struct MockSession {
    screen: watch::Sender<Option<Screen>>,
    messages: watch::Sender<Option<Messages>>,
    processing: watch::Sender<bool>,
    submissions: Mutex<Vec<(String, HashMap<StateKey, StateValue>)>>,
    continuations: Mutex<Vec<Option<String>>>,
    fallbacks: AtomicUsize,
    submit_error: Mutex<Option<FlowError>>,
    continue_error: Mutex<Option<FlowError>>,
    redirect_expected: AtomicBool,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            screen: watch::channel(None).0,
            messages: watch::channel(None).0,
            processing: watch::channel(false).0,
            submissions: Mutex::new(Vec::new()),
            continuations: Mutex::new(Vec::new()),
            fallbacks: AtomicUsize::new(0),
            submit_error: Mutex::new(None),
            continue_error: Mutex::new(None),
            redirect_expected: AtomicBool::new(false),
        }
    }
}

impl MockSession {
    pub(crate) fn with_submit_error(self, error: FlowError) -> Self {
        *self.submit_error.lock().unwrap() = Some(error);
        self
    }

    pub(crate) fn with_continue_error(self, error: FlowError) -> Self {
        *self.continue_error.lock().unwrap() = Some(error);
        self
    }

    pub(crate) fn expecting_redirect(self) -> Self {
        self.redirect_expected.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn set_messages(&self, messages: Messages) {
        self.messages.send_replace(Some(messages));
    }

    pub(crate) fn set_processing(&self, processing: bool) {
        self.processing.send_replace(processing);
    }

    pub(crate) fn submissions(&self) -> Vec<(String, HashMap<StateKey, StateValue>)> {
        self.submissions.lock().unwrap().clone()
    }

    pub(crate) fn continuations(&self) -> Vec<Option<String>> {
        self.continuations.lock().unwrap().clone()
    }

    pub(crate) fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionAdapter for MockSession {
    fn current_screen(&self) -> watch::Receiver<Option<Screen>> {
        self.screen.subscribe()
    }

    fn current_messages(&self) -> watch::Receiver<Option<Messages>> {
        self.messages.subscribe()
    }

    fn processing(&self) -> watch::Receiver<bool> {
        self.processing.subscribe()
    }

    async fn submit(
        &self,
        form_id: &str,
        values: HashMap<StateKey, StateValue>,
    ) -> Result<(), FlowError> {
        if let Some(error) = self.submit_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.submissions
            .lock()
            .unwrap()
            .push((form_id.to_string(), values));
        Ok(())
    }

    async fn continue_flow(&self, redirect_uri: Option<String>) -> Result<(), FlowError> {
        if let Some(error) = self.continue_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.continuations.lock().unwrap().push(redirect_uri);
        Ok(())
    }

    fn trigger_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::SeqCst);
    }

    fn is_redirect_expected(&self) -> bool {
        self.redirect_expected.load(Ordering::SeqCst)
    }
}

/// Scripted credential provider: answers every ceremony with one payload
/// or one failure, recording the shaped requests it was handed.
pub(crate) struct MockProvider {
    response: Result<String, ProviderFailure>,
    requests: Mutex<Vec<String>>,
}

impl MockProvider {
    pub(crate) fn succeeding(payload: &str) -> Self {
        Self {
            response: Ok(payload.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(failure: ProviderFailure) -> Self {
        Self {
            response: Err(failure),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(&self, request_json: String) -> Result<String, ProviderFailure> {
        self.requests.lock().unwrap().push(request_json);
        self.response.clone()
    }
}

#[async_trait]
impl CredentialProvider for MockProvider {
    async fn create_credential(&self, request_json: String) -> Result<String, ProviderFailure> {
        self.answer(request_json)
    }

    async fn get_credential(&self, request_json: String) -> Result<String, ProviderFailure> {
        self.answer(request_json)
    }
}
