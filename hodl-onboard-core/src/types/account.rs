//! 账户相关类型定义

use serde::{Deserialize, Serialize};

use hodl_onboard_provider::log_sanitizer::mask_secret;
use hodl_onboard_provider::{
    ConnectorCredentials, ConnectorType, CredentialBundle, LndhubCredentials,
};

/// Opaque account id assigned by the host at persistence time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Connector configuration of an account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfig {
    /// LNDHub login
    pub login: String,
    /// LNDHub password
    pub password: String,
    /// LNDHub base URL
    pub url: String,
    /// Lightning address shown for the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ln_address: Option<String>,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("login", &self.login)
            .field("password", &mask_secret(&self.password))
            .field("url", &self.url)
            .field("ln_address", &self.ln_address)
            .finish()
    }
}

/// Account as handed to the host channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 账户名称
    pub name: String,
    /// Wallet connector
    pub connector: ConnectorType,
    /// Connector configuration
    pub config: AccountConfig,
}

impl Account {
    /// Derive the account for a freshly provisioned wallet.
    ///
    /// `name` is the bundle's handle and `config.ln_address` its lightning
    /// address, copied verbatim.
    #[must_use]
    pub fn from_bundle(bundle: &CredentialBundle) -> Self {
        let LndhubCredentials {
            login,
            password,
            url,
        } = bundle.lndhub.clone();
        Self {
            name: bundle.handle.clone(),
            connector: ConnectorType::Lndhub,
            config: AccountConfig {
                login,
                password,
                url,
                ln_address: Some(bundle.ln_address.clone()),
            },
        }
    }

    /// Connector credentials used to open a live connection.
    #[must_use]
    pub fn credentials(&self) -> ConnectorCredentials {
        match self.connector {
            ConnectorType::Lndhub => ConnectorCredentials::Lndhub(LndhubCredentials {
                login: self.config.login.clone(),
                password: self.config.password.clone(),
                url: self.config.url.clone(),
            }),
        }
    }
}

/// Persisted account as listed by the host, without secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// 账户 ID
    pub id: AccountId,
    /// 账户名称
    pub name: String,
    /// Wallet connector
    pub connector: ConnectorType,
    /// Lightning address, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ln_address: Option<String>,
}

/// Outcome of one validation attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}
