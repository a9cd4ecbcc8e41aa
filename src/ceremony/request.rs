use crate::config::CEREMONY_TIMEOUT_MSEC;
use crate::schema::{AssertionCeremonyOptions, CreationCeremonyOptions};
use crate::utils::base64url_decode;

use super::errors::CeremonyFailure;

/// Shapes the provider request for a creation (enrollment) ceremony.
///
/// The server's options pass through verbatim except for the timeout
/// default; a challenge that is not base64url is rejected here, before the
/// provider is ever invoked.
pub(crate) fn creation_request(
    options: &CreationCeremonyOptions,
) -> Result<String, CeremonyFailure> {
    ensure_challenge(&options.challenge)?;

    let mut shaped = options.clone();
    if shaped.timeout.is_none() {
        shaped.timeout = Some(*CEREMONY_TIMEOUT_MSEC);
    }

    serde_json::to_string(&shaped).map_err(|e| {
        tracing::warn!(error = %e, "failed to serialize creation ceremony request");
        CeremonyFailure::Unexpected
    })
}

/// Shapes the provider request for an assertion (login) ceremony.
pub(crate) fn assertion_request(
    options: &AssertionCeremonyOptions,
) -> Result<String, CeremonyFailure> {
    ensure_challenge(&options.challenge)?;

    let mut shaped = options.clone();
    if shaped.timeout.is_none() {
        shaped.timeout = Some(*CEREMONY_TIMEOUT_MSEC);
    }

    serde_json::to_string(&shaped).map_err(|e| {
        tracing::warn!(error = %e, "failed to serialize assertion ceremony request");
        CeremonyFailure::Unexpected
    })
}

fn ensure_challenge(challenge: &str) -> Result<(), CeremonyFailure> {
    base64url_decode(challenge).map(|_| ()).map_err(|e| {
        tracing::warn!(error = %e, "ceremony challenge is not base64url");
        CeremonyFailure::Configuration
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CeremonyUser, CredentialParameter, RelyingParty};
    use crate::utils::base64url_encode;

    fn creation_options(challenge: &str) -> CreationCeremonyOptions {
        CreationCeremonyOptions {
            rp: RelyingParty {
                id: "example.com".to_string(),
                name: "Example".to_string(),
            },
            user: CeremonyUser {
                id: base64url_encode(b"user-1".to_vec()),
                name: "user@example.com".to_string(),
                display_name: "User".to_string(),
            },
            challenge: challenge.to_string(),
            pub_key_cred_params: vec![CredentialParameter {
                type_: "public-key".to_string(),
                alg: -7,
            }],
            exclude_credentials: vec![],
            authenticator_selection: None,
            attestation: Some("none".to_string()),
            timeout: None,
        }
    }

    fn assertion_options(challenge: &str) -> AssertionCeremonyOptions {
        AssertionCeremonyOptions {
            challenge: challenge.to_string(),
            rp_id: "example.com".to_string(),
            allow_credentials: vec![],
            user_verification: "preferred".to_string(),
            timeout: None,
        }
    }

    #[test]
    fn test_creation_request_applies_default_timeout() {
        let challenge = base64url_encode(b"challenge".to_vec());
        let request = creation_request(&creation_options(&challenge)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&request).unwrap();
        assert_eq!(parsed["timeout"], *CEREMONY_TIMEOUT_MSEC);
        assert_eq!(parsed["challenge"], challenge);
        assert_eq!(parsed["rp"]["id"], "example.com");
    }

    #[test]
    fn test_assertion_request_keeps_server_timeout() {
        let challenge = base64url_encode(b"challenge".to_vec());
        let mut options = assertion_options(&challenge);
        options.timeout = Some(90_000);

        let request = assertion_request(&options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&request).unwrap();
        assert_eq!(parsed["timeout"], 90_000);
        assert_eq!(parsed["rpId"], "example.com");
    }

    /// A malformed challenge is a configuration-class failure and never
    /// reaches the provider.
    #[test]
    fn test_invalid_challenge_rejected_as_configuration() {
        let result = creation_request(&creation_options("not base64url!!"));
        assert_eq!(result, Err(CeremonyFailure::Configuration));

        let result = assertion_request(&assertion_options("not base64url!!"));
        assert_eq!(result, Err(CeremonyFailure::Configuration));
    }
}
