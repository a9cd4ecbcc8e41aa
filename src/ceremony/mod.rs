//! Credential ceremony orchestration.
//!
//! Shapes creation/assertion requests from the widget's ceremony
//! parameters, drives the platform [`CredentialProvider`], and classifies
//! every outcome into the closed [`CeremonyOutcome`] taxonomy. User
//! cancellation is a first-class, non-exceptional outcome: the form can be
//! resumed and the ceremony retried without side effects.

mod errors;
mod provider;
mod request;

use serde_json::Value;

use crate::schema::{AssertionCeremonyOptions, CreationCeremonyOptions};

pub use errors::{CeremonyFailure, ProviderFailure};
pub use provider::CredentialProvider;

pub(crate) use errors::classify;
pub(crate) use request::{assertion_request, creation_request};

/// Result of one ceremony run.
#[derive(Debug, Clone, PartialEq)]
pub enum CeremonyOutcome {
    /// The provider produced an attestation/assertion payload, forwarded
    /// opaquely as the widget's value.
    Completed(Value),
    /// The user dismissed the prompt. Silent; retryable.
    Cancelled,
    /// A classified failure with a generic user message.
    Failed(CeremonyFailure),
}

/// Runs a credential creation (enrollment) ceremony.
pub(crate) async fn run_creation(
    provider: &dyn CredentialProvider,
    options: &CreationCeremonyOptions,
) -> CeremonyOutcome {
    let request = match creation_request(options) {
        Ok(request) => request,
        Err(failure) => return CeremonyOutcome::Failed(failure),
    };

    finish(provider.create_credential(request).await, "creation")
}

/// Runs a credential assertion (login) ceremony.
pub(crate) async fn run_assertion(
    provider: &dyn CredentialProvider,
    options: &AssertionCeremonyOptions,
) -> CeremonyOutcome {
    let request = match assertion_request(options) {
        Ok(request) => request,
        Err(failure) => return CeremonyOutcome::Failed(failure),
    };

    finish(provider.get_credential(request).await, "assertion")
}

fn finish(result: Result<String, ProviderFailure>, kind: &str) -> CeremonyOutcome {
    match result {
        Ok(payload) => match serde_json::from_str::<Value>(&payload) {
            Ok(value) => {
                tracing::debug!(kind, "credential ceremony completed");
                CeremonyOutcome::Completed(value)
            }
            Err(e) => {
                tracing::warn!(kind, error = %e, "provider returned non-JSON payload");
                CeremonyOutcome::Failed(CeremonyFailure::Unexpected)
            }
        },
        Err(ProviderFailure::Cancelled) => {
            tracing::debug!(kind, "user cancelled credential ceremony");
            CeremonyOutcome::Cancelled
        }
        Err(failure) => {
            // Full detail is log-only; the user sees the generic message.
            tracing::warn!(kind, error = %failure, "credential ceremony failed");
            CeremonyOutcome::Failed(classify(&failure))
        }
    }
}
