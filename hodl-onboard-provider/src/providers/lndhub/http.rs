//! LNDHub HTTP 请求方法

use reqwest::Url;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::join_url;
use crate::traits::{ProviderErrorMapper, RawApiError};
use crate::types::{LndhubAuthRequest, LndhubAuthResponse};

use super::LndhubConnector;

impl LndhubConnector {
    /// 执行 `POST /auth?type=auth`，返回 access token
    pub(crate) async fn authenticate(&self) -> Result<String> {
        let base = Url::parse(&self.credentials.url).map_err(|e| {
            ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "url".to_string(),
                detail: format!("{}: {e}", self.credentials.url),
            }
        })?;
        let url = join_url(base.as_str(), "auth?type=auth");

        let request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&LndhubAuthRequest {
                login: &self.credentials.login,
                password: &self.credentials.password,
            });

        let (_status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        let auth: LndhubAuthResponse =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if auth.error.unwrap_or(false) {
            let code = auth.code.map(|c| c.to_string()).unwrap_or_default();
            let message = auth.message.unwrap_or_else(|| "Unknown error".to_string());
            log::warn!("[{}] Auth refused (code {code}): {message}", self.provider_name());
            return Err(self.map_error(RawApiError::with_code(code, message)));
        }

        match auth.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(self.parse_error("auth response is missing `access_token`")),
        }
    }
}
