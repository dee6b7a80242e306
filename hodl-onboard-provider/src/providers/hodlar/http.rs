//! HODL.ar HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};
use crate::types::{CredentialBundle, SignupBody, SignupEnvelope};

use super::HodlarSignupClient;

impl HodlarSignupClient {
    /// 执行 signup POST 请求并解包响应信封
    pub(crate) async fn post_signup(&self, identifier: &str) -> Result<CredentialBundle> {
        let request = self
            .client
            .post(&self.signup_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("X-User-Agent", &self.client_id)
            .json(&SignupBody { github: identifier });

        let (_status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            &self.signup_url,
        )
        .await?;

        let envelope: SignupEnvelope =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            log::warn!("[{}] Signup rejected: {message}", self.provider_name());
            return Err(self.map_error(RawApiError::new(message)));
        }

        let data = envelope
            .data
            .ok_or_else(|| self.malformed("response is missing the `data` field"))?;

        serde_json::from_value(data).map_err(|e| {
            log::error!("[{}] Credential bundle decode failed: {e}", self.provider_name());
            self.malformed(e)
        })
    }
}
