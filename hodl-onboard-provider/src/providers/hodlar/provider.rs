//! HODL.ar `SignupClient` 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ProviderErrorMapper, SignupClient};
use crate::types::CredentialBundle;

use super::HodlarSignupClient;

#[async_trait]
impl SignupClient for HodlarSignupClient {
    fn id(&self) -> &'static str {
        "hodlar"
    }

    async fn create_account(&self, identifier: &str) -> Result<CredentialBundle> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "github".to_string(),
                detail: "identifier must not be empty".to_string(),
            });
        }

        let bundle = self.post_signup(identifier).await?;
        log::info!(
            "[{}] Wallet created for {identifier}: handle={}, lnAddress={}",
            self.provider_name(),
            bundle.handle,
            bundle.ln_address
        );
        Ok(bundle)
    }
}
