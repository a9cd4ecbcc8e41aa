//! Continuation of a flow interrupted by an external redirect.

use url::Url;

use crate::session::FlowError;

use super::LoginController;

impl LoginController {
    /// Resumes a redirect-based step when the host returns to the
    /// foreground.
    ///
    /// A guarded no-op (`Ok(false)`) unless the session is actually
    /// waiting on a redirect, so ordinary foreground transitions never
    /// touch the flow. The captured URI is validated for shape only; an
    /// unparsable one is handed on as absent rather than failing the
    /// continuation, since the session can still poll its own state.
    pub async fn resume_from_foreground(
        &self,
        redirect_uri: Option<&str>,
    ) -> Result<bool, FlowError> {
        if !self.session().is_redirect_expected() {
            tracing::debug!("foreground resume with no redirect pending");
            return Ok(false);
        }

        let validated = redirect_uri.and_then(|raw| match Url::parse(raw) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "captured redirect URI is unparsable; continuing without it");
                None
            }
        });

        tracing::debug!(
            captured = validated.is_some(),
            "resuming flow from foreground"
        );
        self.session().continue_flow(validated).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::test_utils::{MockProvider, MockSession};

    use super::*;

    fn controller(session: MockSession) -> (LoginController, Arc<MockSession>) {
        let session = Arc::new(session);
        let controller =
            LoginController::new(session.clone(), Arc::new(MockProvider::succeeding("{}")));
        (controller, session)
    }

    #[tokio::test]
    async fn test_noop_when_no_redirect_pending() {
        let (controller, session) = controller(MockSession::default());

        let resumed = controller.resume_from_foreground(None).await.unwrap();

        assert!(!resumed);
        assert!(session.continuations().is_empty());
    }

    #[tokio::test]
    async fn test_valid_uri_passed_through() {
        let (controller, session) = controller(MockSession::default().expecting_redirect());

        let resumed = controller
            .resume_from_foreground(Some("myapp://callback?code=abc&state=xyz"))
            .await
            .unwrap();

        assert!(resumed);
        assert_eq!(
            session.continuations(),
            vec![Some("myapp://callback?code=abc&state=xyz".to_string())]
        );
    }

    #[tokio::test]
    async fn test_unparsable_uri_degrades_to_none() {
        let (controller, session) = controller(MockSession::default().expecting_redirect());

        let resumed = controller
            .resume_from_foreground(Some("not a uri at all"))
            .await
            .unwrap();

        assert!(resumed);
        assert_eq!(session.continuations(), vec![None]);
    }

    #[tokio::test]
    async fn test_continuation_failure_surfaces_flow_error() {
        let session = MockSession::default()
            .expecting_redirect()
            .with_continue_error(FlowError::SessionExpired);
        let (controller, _session) = controller(session);

        let result = controller.resume_from_foreground(None).await;
        assert_eq!(result, Err(FlowError::SessionExpired));
    }
}
