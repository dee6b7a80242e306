//! Local credential-management host.
//!
//! Validates accounts with a live connector probe and persists them in a
//! [`JsonAccountFile`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use hodl_onboard_core::error::ProvisioningResult;
use hodl_onboard_core::traits::{
    AddAccountResponse, HostChannel, SelectAccountRequest, ValidateAccountResponse,
};
use hodl_onboard_core::types::{Account, AccountId, AccountSummary};
use hodl_onboard_provider::{create_connector, ProviderError};

use super::JsonAccountFile;

pub struct LocalHostChannel {
    accounts: Arc<JsonAccountFile>,
    request_timeout: Duration,
}

impl LocalHostChannel {
    #[must_use]
    pub fn new(accounts: Arc<JsonAccountFile>, request_timeout: Duration) -> Self {
        Self {
            accounts,
            request_timeout,
        }
    }
}

/// Text shown to the user when a probe fails.
fn validation_message(err: ProviderError) -> String {
    match err {
        ProviderError::InvalidCredentials {
            raw_message: Some(message),
            ..
        }
        | ProviderError::Unknown {
            raw_message: message,
            ..
        } => message,
        other => other.to_string(),
    }
}

#[async_trait]
impl HostChannel for LocalHostChannel {
    async fn validate_account(
        &self,
        account: &Account,
    ) -> ProvisioningResult<ValidateAccountResponse> {
        let connector = create_connector(account.credentials(), self.request_timeout);
        match connector.validate_credentials().await {
            Ok(()) => Ok(ValidateAccountResponse {
                valid: true,
                error: None,
            }),
            Err(e) => {
                log::warn!("[{}] Validation failed: {e}", connector.connector_type());
                Ok(ValidateAccountResponse {
                    valid: false,
                    error: Some(validation_message(e)),
                })
            }
        }
    }

    async fn add_account(&self, account: &Account) -> ProvisioningResult<AddAccountResponse> {
        let id = self.accounts.insert(account).await?;
        Ok(AddAccountResponse {
            account_id: Some(id),
        })
    }

    async fn select_account(&self, request: &SelectAccountRequest) -> ProvisioningResult<()> {
        self.accounts.select(&request.id).await
    }

    async fn remove_account(&self, id: &AccountId) -> ProvisioningResult<()> {
        self.accounts.remove(id).await
    }

    async fn list_accounts(&self) -> ProvisioningResult<Vec<AccountSummary>> {
        Ok(self.accounts.list().await)
    }

    async fn current_account_id(&self) -> ProvisioningResult<Option<AccountId>> {
        Ok(self.accounts.current().await)
    }
}
