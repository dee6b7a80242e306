use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ConnectorType, CredentialBundle};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote wallet signup service.
///
/// One call provisions one wallet; implementations must not retry.
#[async_trait]
pub trait SignupClient: Send + Sync {
    /// 服务标识符
    fn id(&self) -> &'static str;

    /// Exchange an external identifier (GitHub username) for a credential bundle.
    ///
    /// # Errors
    /// * [`ProviderError::SignupRejected`] - the service answered `success: false`
    /// * [`ProviderError::MalformedResponse`] - `success: true` without a usable bundle
    /// * [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] / [`ProviderError::ParseError`] - transport failures
    async fn create_account(&self, identifier: &str) -> Result<CredentialBundle>;
}

/// Live connection probe for a wallet backend.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Connector kind served by this instance.
    fn connector_type(&self) -> ConnectorType;

    /// Check that the configured credentials open a usable session.
    ///
    /// Returns `Ok(())` when they do and
    /// [`ProviderError::InvalidCredentials`] when the backend refuses them.
    async fn validate_credentials(&self) -> Result<()>;
}
