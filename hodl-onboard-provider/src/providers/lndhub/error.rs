//! LNDHub error mapping

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::LndhubConnector;

/// LNDHub error code mapping
/// Reference: `BlueWallet/LndHub` `controllers/api.js` error table
impl ProviderErrorMapper for LndhubConnector {
    fn provider_name(&self) -> &'static str {
        "lndhub"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.code.as_deref() {
            // 1: bad auth
            // 6: unauthorized (expired or unknown token)
            Some("1" | "6") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            // 8: bad arguments
            Some("8") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "login".to_string(),
                detail: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}
