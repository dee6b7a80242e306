//! Host message channel abstract Trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProvisioningResult;
use crate::types::{Account, AccountId, AccountSummary};

/// Reply to `validateAccount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAccountResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reply to `addAccount`. A missing id means nothing was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountResponse {
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

/// Body of `selectAccount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectAccountRequest {
    pub id: AccountId,
}

/// Credential-management subsystem boundary
///
/// Every method is a single request/response round trip. Implementations
/// report a broken channel as `ProvisioningError::HostChannelError`, a
/// refused write as `ProvisioningError::PersistenceError` and an unknown id
/// as `ProvisioningError::UnknownAccountError`.
///
/// Platform implementation:
/// - `LocalHostChannel` (hodl-onboard-app): JSON account file + live LNDHub probe
#[async_trait]
pub trait HostChannel: Send + Sync {
    /// Try a live connection with the account's connector configuration
    async fn validate_account(&self, account: &Account)
        -> ProvisioningResult<ValidateAccountResponse>;

    /// Persist an account
    async fn add_account(&self, account: &Account) -> ProvisioningResult<AddAccountResponse>;

    /// Make an account the active one
    async fn select_account(&self, request: &SelectAccountRequest) -> ProvisioningResult<()>;

    /// Delete a persisted account
    async fn remove_account(&self, id: &AccountId) -> ProvisioningResult<()>;

    /// List persisted accounts
    async fn list_accounts(&self) -> ProvisioningResult<Vec<AccountSummary>>;

    /// Id of the account selected in a previous session, if any
    async fn current_account_id(&self) -> ProvisioningResult<Option<AccountId>>;
}
