use async_trait::async_trait;

use super::errors::ProviderFailure;

/// Platform credential provider performing the cryptographic side of a
/// public-key credential ceremony.
///
/// The engine only shapes request JSON and classifies outcomes; key
/// handling, user verification, and attestation stay behind this trait.
/// Both methods take the ceremony options serialized in the
/// `navigator.credentials` wire shape and return the provider's response
/// JSON verbatim.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Creates a new credential (enrollment / attestation ceremony).
    async fn create_credential(&self, request_json: String) -> Result<String, ProviderFailure>;

    /// Asserts an existing credential (login ceremony).
    async fn get_credential(&self, request_json: String) -> Result<String, ProviderFailure>;
}
