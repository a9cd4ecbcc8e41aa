use thiserror::Error;

/// Flow-level error states surfaced near the primary action.
///
/// Session expiry, hosted-flow cancellation, and user cancellation are
/// expected, recoverable states; they terminate the current attempt but
/// never the host surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// OIDC-style error returned by the authorization server
    #[error("oidc error: {error}")]
    Oidc {
        error: String,
        error_description: Option<String>,
    },

    /// The user abandoned a hosted (browser) step of the flow
    #[error("hosted flow canceled")]
    HostedFlowCanceled,

    /// The login session on the server is no longer valid
    #[error("session expired")]
    SessionExpired,

    /// User-triggered cancellation of the whole flow
    #[error("flow canceled")]
    Canceled,

    /// Network or session-layer failure during submission; retried only by
    /// explicit user action
    #[error("submission failed: {0}")]
    Submission(String),

    /// Anything the taxonomy does not cover
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FlowError {
    /// Plain text a host renders near the primary action. Diagnostic
    /// detail stays in the logs.
    pub fn user_text(&self) -> String {
        match self {
            FlowError::Oidc {
                error,
                error_description,
            } => error_description.clone().unwrap_or_else(|| error.clone()),
            FlowError::HostedFlowCanceled => "Hosted flow canceled".to_string(),
            FlowError::SessionExpired => "Session expired".to_string(),
            FlowError::Canceled => "Login canceled".to_string(),
            FlowError::Submission(_) | FlowError::Unexpected(_) => "N/A".to_string(),
        }
    }

    /// True for states the user is expected to recover from by starting
    /// over, as opposed to genuine failures.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FlowError::HostedFlowCanceled | FlowError::SessionExpired | FlowError::Canceled
        )
    }
}
