//! File-backed account store.
//!
//! Keeps `{ "accounts": [...], "currentAccountId": ... }` in one JSON file,
//! cached in memory. Every mutation is applied to a copy, written to a temp
//! file and renamed over the original before the cache is updated.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use hodl_onboard_core::error::{ProvisioningError, ProvisioningResult};
use hodl_onboard_core::types::{Account, AccountId, AccountSummary};

use crate::error::{AppError, AppResult};

/// Largest account file that will be read.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// An account as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAccount {
    pub id: AccountId,
    #[serde(flatten)]
    pub account: Account,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredAccount {
    fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            name: self.account.name.clone(),
            connector: self.account.connector,
            ln_address: self.account.config.ln_address.clone(),
        }
    }

    fn same_wallet(&self, account: &Account) -> bool {
        self.account.connector == account.connector
            && self.account.config.login == account.config.login
            && self.account.config.url == account.config.url
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountsDocument {
    #[serde(default)]
    accounts: Vec<StoredAccount>,
    #[serde(default)]
    current_account_id: Option<AccountId>,
}

/// JSON account file
pub struct JsonAccountFile {
    path: PathBuf,
    doc: RwLock<AccountsDocument>,
}

impl JsonAccountFile {
    pub const FILE_NAME: &'static str = "accounts.json";

    /// Open `path`, starting empty if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let doc = read_document(&path).await?;
        log::info!(
            "Loaded {} account(s) from {}",
            doc.accounts.len(),
            path.display()
        );
        Ok(Self {
            path,
            doc: RwLock::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `account` under a fresh UUID.
    ///
    /// An account for the same login on the same server is refused.
    pub async fn insert(&self, account: &Account) -> ProvisioningResult<AccountId> {
        let mut doc = self.doc.write().await;
        if let Some(existing) = doc.accounts.iter().find(|a| a.same_wallet(account)) {
            return Err(ProvisioningError::PersistenceError(format!(
                "wallet already stored as account {}",
                existing.id
            )));
        }

        let now = Utc::now();
        let id = AccountId::new(uuid::Uuid::new_v4().to_string());
        let mut next = doc.clone();
        next.accounts.push(StoredAccount {
            id: id.clone(),
            account: account.clone(),
            created_at: now,
            updated_at: now,
        });

        self.write_document(&next).await?;
        *doc = next;
        Ok(id)
    }

    /// Make `id` the current account.
    pub async fn select(&self, id: &AccountId) -> ProvisioningResult<()> {
        let mut doc = self.doc.write().await;
        if !doc.accounts.iter().any(|a| &a.id == id) {
            return Err(ProvisioningError::UnknownAccountError(id.to_string()));
        }

        let mut next = doc.clone();
        next.current_account_id = Some(id.clone());
        self.write_document(&next).await?;
        *doc = next;
        Ok(())
    }

    /// Delete `id`, clearing the current account if it was the one.
    pub async fn remove(&self, id: &AccountId) -> ProvisioningResult<()> {
        let mut doc = self.doc.write().await;
        let mut next = doc.clone();
        let before = next.accounts.len();
        next.accounts.retain(|a| &a.id != id);
        if next.accounts.len() == before {
            return Err(ProvisioningError::UnknownAccountError(id.to_string()));
        }
        if next.current_account_id.as_ref() == Some(id) {
            next.current_account_id = None;
        }

        self.write_document(&next).await?;
        *doc = next;
        Ok(())
    }

    pub async fn list(&self) -> Vec<AccountSummary> {
        self.doc
            .read()
            .await
            .accounts
            .iter()
            .map(StoredAccount::summary)
            .collect()
    }

    pub async fn get(&self, id: &AccountId) -> Option<StoredAccount> {
        self.doc
            .read()
            .await
            .accounts
            .iter()
            .find(|a| &a.id == id)
            .cloned()
    }

    pub async fn current(&self) -> Option<AccountId> {
        self.doc.read().await.current_account_id.clone()
    }

    async fn write_document(&self, doc: &AccountsDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::io(parent, e))?;
        }

        let json = serde_json::to_vec_pretty(doc).map_err(|e| AppError::json(&self.path, e))?;
        let temp_path = self.path.with_extension("json.tmp");
        match tokio::fs::remove_file(&temp_path).await {
            Ok(()) => log::debug!("Removed stale {}", temp_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AppError::io(&temp_path, e)),
        }

        // Holds LNDHub passwords: owner-only from creation
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options
            .open(&temp_path)
            .await
            .map_err(|e| AppError::io(&temp_path, e))?;
        file.write_all(&json)
            .await
            .map_err(|e| AppError::io(&temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| AppError::io(&temp_path, e))?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| AppError::io(&self.path, e))?;
        log::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

async fn read_document(path: &Path) -> AppResult<AccountsDocument> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AccountsDocument::default());
        }
        Err(e) => return Err(AppError::io(path, e)),
    };
    if metadata.len() > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            path: path.to_path_buf(),
            limit: MAX_FILE_SIZE,
        });
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::json(path, e))
}
