//! HODL.ar Onboarding Core Library
//!
//! Provides the provisioning pipeline that turns a GitHub username into an
//! active wallet account:
//! - Credential client (remote signup)
//! - Account validator (live connection check through the host)
//! - Account store (persistence and the active account)
//! - Provisioning orchestrator (state machine and user-visible outcome)
//!
//! This library is platform-independent: the credential-management host and
//! the UI are reached through the [`HostChannel`] and
//! [`ProvisioningObserver`] traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod test_utils;

// Re-export common types
pub use error::{ProvisioningError, ProvisioningResult};
pub use services::{
    AccountStore, AccountValidator, CredentialClient, ProvisioningOrchestrator, ServiceContext,
};
pub use traits::{HostChannel, NoopObserver, ProvisioningObserver};
