//! HODL.ar wallet signup service

mod error;
mod http;
mod provider;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::providers::common::{DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client};

/// Production signup endpoint.
pub const DEFAULT_SIGNUP_URL: &str = "https://hodl.ar/api/users/create";
/// Value of the `X-User-Agent` header identifying the caller.
pub const DEFAULT_CLIENT_ID: &str = "alby-extension";

/// Connection settings for [`HodlarSignupClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HodlarConfig {
    /// Full URL of the `users/create` endpoint.
    pub signup_url: String,
    /// Sent as `X-User-Agent`.
    pub client_id: String,
    /// Transport-level request timeout.
    pub request_timeout_secs: u64,
}

impl Default for HodlarConfig {
    fn default() -> Self {
        Self {
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// HODL.ar signup client
pub struct HodlarSignupClient {
    pub(crate) client: Client,
    pub(crate) signup_url: String,
    pub(crate) client_id: String,
}

impl HodlarSignupClient {
    pub fn new(config: HodlarConfig) -> Self {
        Self {
            client: create_http_client(Duration::from_secs(config.request_timeout_secs)),
            signup_url: config.signup_url,
            client_id: config.client_id,
        }
    }
}

impl Default for HodlarSignupClient {
    fn default() -> Self {
        Self::new(HodlarConfig::default())
    }
}
