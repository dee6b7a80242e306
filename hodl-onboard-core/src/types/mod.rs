//! 类型定义模块

mod account;
mod provisioning;
mod signup;

pub use account::{Account, AccountConfig, AccountId, AccountSummary, ValidationResult};
pub use provisioning::{OrphanPolicy, ProvisioningState, Toast, ToastKind, TEST_CONNECTION_ROUTE};
pub use signup::{SignupRequest, IDENTIFIER_MAX_LEN, IDENTIFIER_MIN_LEN};

// Re-export provider 库的公共类型
pub use hodl_onboard_provider::{
    ConnectorCredentials, ConnectorType, CredentialBundle, LndhubCredentials,
};
