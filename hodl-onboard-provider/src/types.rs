//! Wire and credential types shared by the signup client and the connectors.

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Connector Types ============

/// Identifies which wallet connector an account uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorType {
    /// LNDHub-compatible custodial wallet (login / password / url).
    Lndhub,
}

impl std::fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lndhub => write!(f, "lndhub"),
        }
    }
}

/// LNDHub login triple.
///
/// `Debug` masks the password so the struct can be logged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LndhubCredentials {
    /// LNDHub login.
    pub login: String,
    /// LNDHub password.
    pub password: String,
    /// Base URL of the LNDHub instance.
    pub url: String,
}

impl std::fmt::Debug for LndhubCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LndhubCredentials")
            .field("login", &self.login)
            .field("password", &mask_secret(&self.password))
            .field("url", &self.url)
            .finish()
    }
}

/// Type-safe connector credentials.
///
/// Serialized as a tagged enum with `"connector"` as the tag and
/// `"credentials"` as the content:
///
/// ```json
/// { "connector": "lndhub", "credentials": { "login": "...", "password": "...", "url": "..." } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "connector", content = "credentials")]
pub enum ConnectorCredentials {
    /// LNDHub credentials.
    #[serde(rename = "lndhub")]
    Lndhub(LndhubCredentials),
}

impl ConnectorCredentials {
    /// The connector these credentials belong to.
    #[must_use]
    pub fn connector_type(&self) -> ConnectorType {
        match self {
            Self::Lndhub(_) => ConnectorType::Lndhub,
        }
    }
}

// ============ Signup Types ============

/// Body of the signup request: `{"github": "<identifier>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupBody<'a> {
    /// GitHub username the wallet is provisioned for.
    pub github: &'a str,
}

/// Response envelope of the signup service.
///
/// `data` is kept as raw JSON so that a malformed payload can be reported
/// separately from an undecodable envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupEnvelope {
    /// Whether the wallet was created.
    pub success: bool,
    /// Server-supplied human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Credential bundle on success.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Credential bundle returned by the signup service.
///
/// `handle`, `ln_address` and `lndhub` are required; the remaining fields are
/// display metadata the service may omit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialBundle {
    /// Service-side username.
    #[serde(default)]
    pub username: Option<String>,
    /// Display handle, used as the account name.
    pub handle: String,
    /// Lightning address (`user@domain`).
    pub ln_address: String,
    /// `LNbits` user id backing the wallet.
    #[serde(default)]
    pub lnbit_user: Option<String>,
    /// API endpoint of the wallet service.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Web wallet URL.
    #[serde(default)]
    pub wallet_url: Option<String>,
    /// Login secret for the LNDHub connector.
    pub lndhub: LndhubCredentials,
}

// ============ LNDHub Types ============

/// `POST /auth?type=auth` request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LndhubAuthRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// `POST /auth` response: either tokens or an LNDHub error object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LndhubAuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<bool>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
