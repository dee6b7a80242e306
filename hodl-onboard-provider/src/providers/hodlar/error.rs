//! HODL.ar error mapping

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::HodlarSignupClient;

/// The signup service has no error codes: every `success: false` envelope is
/// a rejection carrying a free-form message.
impl ProviderErrorMapper for HodlarSignupClient {
    fn provider_name(&self) -> &'static str {
        "hodlar"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::SignupRejected {
            provider: self.provider_name().to_string(),
            message: raw.message,
        }
    }
}

impl HodlarSignupClient {
    /// 快捷方法：响应缺少必需字段
    pub(crate) fn malformed(&self, detail: impl ToString) -> ProviderError {
        ProviderError::MalformedResponse {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}
