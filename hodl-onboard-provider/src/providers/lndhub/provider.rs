//! LNDHub `WalletConnector` 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::WalletConnector;
use crate::types::ConnectorType;
use crate::utils::log_sanitizer::mask_secret;

use super::LndhubConnector;

#[async_trait]
impl WalletConnector for LndhubConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Lndhub
    }

    async fn validate_credentials(&self) -> Result<()> {
        let token = self.authenticate().await?;
        log::debug!(
            "[lndhub] Session opened for {} (token {})",
            self.credentials.login,
            mask_secret(&token)
        );
        Ok(())
    }
}
