//! LNDHub wallet connector

mod error;
mod http;
mod provider;

use std::time::Duration;

use reqwest::Client;

use crate::providers::common::{DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client};
use crate::types::LndhubCredentials;

/// LNDHub connector
pub struct LndhubConnector {
    pub(crate) client: Client,
    pub(crate) credentials: LndhubCredentials,
}

impl LndhubConnector {
    pub fn new(credentials: LndhubCredentials) -> Self {
        Self::with_timeout(
            credentials,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(credentials: LndhubCredentials, request_timeout: Duration) -> Self {
        Self {
            client: create_http_client(request_timeout),
            credentials,
        }
    }
}
