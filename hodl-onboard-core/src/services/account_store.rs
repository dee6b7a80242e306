//! Account store
//!
//! Tracks which accounts were persisted through the host and which one is
//! active. The host owns the records; this service keeps the ids it has seen
//! so that `select` can refuse an id that was never added.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::services::ServiceContext;
use crate::traits::{HostChannel, SelectAccountRequest};
use crate::types::{Account, AccountId, AccountSummary};

/// Account store
pub struct AccountStore {
    host: Arc<dyn HostChannel>,
    /// At most one active account
    active: RwLock<Option<AccountId>>,
    known: RwLock<HashSet<AccountId>>,
}

impl AccountStore {
    #[must_use]
    pub fn new(ctx: &ServiceContext) -> Self {
        Self {
            host: Arc::clone(ctx.host_channel()),
            active: RwLock::new(None),
            known: RwLock::new(HashSet::new()),
        }
    }

    /// Seed known ids and the active pointer from what the host already holds.
    pub async fn restore(&self) -> ProvisioningResult<usize> {
        let accounts = self.host.list_accounts().await?;
        let current = self.host.current_account_id().await?;

        let mut known = self.known.write().await;
        known.clear();
        known.extend(accounts.into_iter().map(|a| a.id));

        let mut active = self.active.write().await;
        *active = current.filter(|id| known.contains(id));

        log::info!(
            "Restored {} account(s), active: {}",
            known.len(),
            active.as_ref().map_or("none", AccountId::as_str)
        );
        Ok(known.len())
    }

    /// Persist `account` and return the id the host assigned.
    ///
    /// The returned id is the one later passed to [`Self::select`].
    pub async fn add(&self, account: &Account) -> ProvisioningResult<AccountId> {
        let response = self.host.add_account(account).await.map_err(|e| match e {
            ProvisioningError::HostChannelError(_) | ProvisioningError::PersistenceError(_) => e,
            other => ProvisioningError::PersistenceError(other.to_string()),
        })?;

        let id = response
            .account_id
            .filter(|id| !id.as_str().is_empty())
            .ok_or_else(|| {
                ProvisioningError::PersistenceError("host returned no account id".to_string())
            })?;

        self.known.write().await.insert(id.clone());
        log::info!("Account {} stored as {id}", account.name);
        Ok(id)
    }

    /// Make `id` the active account.
    ///
    /// On error the previous active account is left untouched.
    pub async fn select(&self, id: &AccountId) -> ProvisioningResult<()> {
        if !self.known.read().await.contains(id) {
            return Err(ProvisioningError::UnknownAccountError(id.to_string()));
        }

        self.host
            .select_account(&SelectAccountRequest { id: id.clone() })
            .await?;

        *self.active.write().await = Some(id.clone());
        log::info!("Account {id} is now active");
        Ok(())
    }

    /// Delete `id` from the host, clearing the active pointer if it matched.
    pub async fn remove(&self, id: &AccountId) -> ProvisioningResult<()> {
        self.host.remove_account(id).await?;

        self.known.write().await.remove(id);
        let mut active = self.active.write().await;
        if active.as_ref() == Some(id) {
            *active = None;
        }
        log::info!("Account {id} removed");
        Ok(())
    }

    pub async fn active_account(&self) -> Option<AccountId> {
        self.active.read().await.clone()
    }

    pub async fn list_accounts(&self) -> ProvisioningResult<Vec<AccountSummary>> {
        self.host.list_accounts().await
    }
}
