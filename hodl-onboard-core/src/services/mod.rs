//! 业务逻辑服务层

mod account_store;
mod account_validator;
mod credential_client;
mod provisioning_orchestrator;

pub use account_store::AccountStore;
pub use account_validator::AccountValidator;
pub use credential_client::CredentialClient;
pub use provisioning_orchestrator::ProvisioningOrchestrator;

use std::sync::Arc;

use hodl_onboard_provider::SignupClient;

use crate::traits::HostChannel;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的实现。
pub struct ServiceContext {
    /// Remote signup service
    signup_client: Arc<dyn SignupClient>,
    /// Credential-management host
    host_channel: Arc<dyn HostChannel>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(signup_client: Arc<dyn SignupClient>, host_channel: Arc<dyn HostChannel>) -> Self {
        Self {
            signup_client,
            host_channel,
        }
    }

    pub fn signup_client(&self) -> &Arc<dyn SignupClient> {
        &self.signup_client
    }

    pub fn host_channel(&self) -> &Arc<dyn HostChannel> {
        &self.host_channel
    }
}
