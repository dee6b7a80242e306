//! Account validator
//!
//! Asks the host whether an account's connector configuration opens a live
//! connection.

use std::sync::Arc;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::services::ServiceContext;
use crate::traits::HostChannel;
use crate::types::{Account, ValidationResult};

/// Account validator
pub struct AccountValidator {
    host: Arc<dyn HostChannel>,
}

impl AccountValidator {
    #[must_use]
    pub fn new(ctx: &ServiceContext) -> Self {
        Self {
            host: Arc::clone(ctx.host_channel()),
        }
    }

    /// Validate `account` through the host.
    ///
    /// An unusable credential set is `Ok` with `valid == false`; only a
    /// failure to talk to the host is an `Err` (`HostChannelError`).
    pub async fn validate(&self, account: &Account) -> ProvisioningResult<ValidationResult> {
        let response = self.host.validate_account(account).await.map_err(|e| match e {
            ProvisioningError::HostChannelError(_) => e,
            other => ProvisioningError::HostChannelError(other.to_string()),
        })?;

        if response.valid {
            log::info!("Account {} validated", account.name);
            return Ok(ValidationResult::valid());
        }

        let error = response
            .error
            .unwrap_or_else(|| "connection could not be established".to_string());
        log::warn!("Account {} failed validation: {error}", account.name);
        Ok(ValidationResult::invalid(error))
    }
}
