use thiserror::Error;

/// Raw failure surface of the platform credential provider.
///
/// Mirrors the exception hierarchy of platform credential managers: the
/// engine never interprets provider internals beyond picking the class.
#[derive(Debug, Clone, Error)]
pub enum ProviderFailure {
    /// WebAuthn DOM-level rejection (e.g. excluded credential, bad RP id)
    #[error("credential provider DOM error: {kind}")]
    Dom { kind: String },

    /// The user dismissed the ceremony prompt. Not an error.
    #[error("user cancelled the credential ceremony")]
    Cancelled,

    /// The operation was interrupted and may be retried
    #[error("credential ceremony interrupted")]
    Interrupted,

    /// No provider is available or the provider is misconfigured
    #[error("credential provider misconfigured: {0}")]
    Configuration(String),

    /// Provider-specific error outside the standard classes
    #[error("credential provider custom error: {0}")]
    Custom(String),

    /// Anything else, including provider panics surfaced as errors
    #[error("unexpected credential provider error: {0}")]
    Other(String),
}

/// Classified, user-presentable ceremony failure.
///
/// Each class carries one generic message with an opaque diagnostic code.
/// The message never exposes provider or cryptographic detail; the full
/// cause is logged where the classification happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CeremonyFailure {
    #[error("Unexpected error occurred, please try again (101).")]
    Dom,

    #[error("Unexpected error occurred, please try again (102).")]
    Interrupted,

    #[error("Unexpected error occurred, please try again (103).")]
    Configuration,

    #[error("Unexpected error occurred, please try again (104).")]
    Custom,

    #[error("Unexpected error occurred, please try again (105).")]
    Unexpected,
}

impl CeremonyFailure {
    /// Opaque code included in the user message, for support tickets.
    pub fn diagnostic_code(&self) -> u16 {
        match self {
            CeremonyFailure::Dom => 101,
            CeremonyFailure::Interrupted => 102,
            CeremonyFailure::Configuration => 103,
            CeremonyFailure::Custom => 104,
            CeremonyFailure::Unexpected => 105,
        }
    }

    /// The generic message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Maps a non-cancellation provider failure onto the closed user-facing
/// taxonomy. Cancellation is handled before classification; mapping it
/// here would turn a first-class outcome into an error.
pub(crate) fn classify(failure: &ProviderFailure) -> CeremonyFailure {
    match failure {
        ProviderFailure::Dom { .. } => CeremonyFailure::Dom,
        ProviderFailure::Interrupted => CeremonyFailure::Interrupted,
        ProviderFailure::Configuration(_) => CeremonyFailure::Configuration,
        ProviderFailure::Custom(_) => CeremonyFailure::Custom,
        ProviderFailure::Cancelled | ProviderFailure::Other(_) => CeremonyFailure::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every failure class yields a distinct generic message and code,
    /// and none of them leak the underlying detail.
    #[test]
    fn test_messages_are_distinct_and_generic() {
        let classes = [
            CeremonyFailure::Dom,
            CeremonyFailure::Interrupted,
            CeremonyFailure::Configuration,
            CeremonyFailure::Custom,
            CeremonyFailure::Unexpected,
        ];

        let mut messages: Vec<String> = classes.iter().map(|c| c.user_message()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), classes.len());

        for class in &classes {
            let message = class.user_message();
            assert!(message.contains(&class.diagnostic_code().to_string()));
            assert!(message.starts_with("Unexpected error occurred"));
        }
    }

    #[test]
    fn test_classification_covers_all_provider_classes() {
        assert_eq!(
            classify(&ProviderFailure::Dom {
                kind: "InvalidStateError".to_string()
            }),
            CeremonyFailure::Dom
        );
        assert_eq!(
            classify(&ProviderFailure::Interrupted),
            CeremonyFailure::Interrupted
        );
        assert_eq!(
            classify(&ProviderFailure::Configuration("no provider".to_string())),
            CeremonyFailure::Configuration
        );
        assert_eq!(
            classify(&ProviderFailure::Custom("vendor".to_string())),
            CeremonyFailure::Custom
        );
        assert_eq!(
            classify(&ProviderFailure::Other("panic".to_string())),
            CeremonyFailure::Unexpected
        );
    }

    /// Classified messages never contain the provider's own wording.
    #[test]
    fn test_provider_detail_not_leaked() {
        let failure = ProviderFailure::Configuration("keystore /dev/secret unreadable".to_string());
        let classified = classify(&failure);
        assert!(!classified.user_message().contains("keystore"));
    }
}
