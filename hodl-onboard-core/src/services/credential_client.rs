//! Credential client
//!
//! Exchanges a signup request for a credential bundle, translating provider
//! failures into the provisioning taxonomy.

use std::sync::Arc;

use hodl_onboard_provider::{CredentialBundle, SignupClient};

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::services::ServiceContext;
use crate::types::SignupRequest;

/// Credential client
pub struct CredentialClient {
    signup_client: Arc<dyn SignupClient>,
}

impl CredentialClient {
    #[must_use]
    pub fn new(ctx: &ServiceContext) -> Self {
        Self {
            signup_client: Arc::clone(ctx.signup_client()),
        }
    }

    /// Issue exactly one signup call for `request`.
    ///
    /// Fails with `RemoteRejected`, `TransportError` or `MalformedResponse`.
    pub async fn create_account(
        &self,
        request: &SignupRequest,
    ) -> ProvisioningResult<CredentialBundle> {
        log::info!(
            "[{}] Requesting wallet for {}",
            self.signup_client.id(),
            request.as_str()
        );

        self.signup_client
            .create_account(request.as_str())
            .await
            .map_err(|e| {
                if e.is_expected() {
                    log::warn!("Signup failed: {e}");
                } else {
                    log::error!("Signup failed: {e}");
                }
                ProvisioningError::from(e)
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{test_bundle, test_context, MockSignupClient};
    use hodl_onboard_provider::ProviderError;

    #[tokio::test]
    async fn create_account_passes_identifier_once() {
        let (ctx, signup, _) = test_context(MockSignupClient::succeeding(test_bundle()));
        let client = CredentialClient::new(&ctx);

        let bundle = client
            .create_account(&SignupRequest::parse("octocat").unwrap())
            .await
            .unwrap();

        assert_eq!(bundle.handle, "octocat");
        assert_eq!(signup.calls().await, vec!["octocat".to_string()]);
    }

    #[tokio::test]
    async fn create_account_maps_rejection() {
        let (ctx, _, _) = test_context(MockSignupClient::failing(ProviderError::SignupRejected {
            provider: "hodlar".to_string(),
            message: "username taken".to_string(),
        }));
        let client = CredentialClient::new(&ctx);

        let err = client
            .create_account(&SignupRequest::parse("octocat").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err, ProvisioningError::RemoteRejected("username taken".into()));
    }

    #[tokio::test]
    async fn create_account_maps_malformed_payload() {
        let (ctx, _, _) =
            test_context(MockSignupClient::failing(ProviderError::MalformedResponse {
                provider: "hodlar".to_string(),
                detail: "missing field `lndhub`".to_string(),
            }));
        let client = CredentialClient::new(&ctx);

        let err = client
            .create_account(&SignupRequest::parse("octocat").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisioningError::MalformedResponse(_)));
    }
}
