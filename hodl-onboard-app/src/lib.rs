//! Platform-agnostic application bootstrap for HODL.ar wallet onboarding.
//!
//! Provides `AppConfig` (file + environment configuration), `AppState`
//! (service container) and `AppStateBuilder` (adapter injection).

pub mod adapters;
pub mod config;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hodl_onboard_core::services::{AccountStore, ProvisioningOrchestrator, ServiceContext};
use hodl_onboard_core::traits::{HostChannel, NoopObserver, ProvisioningObserver};
use hodl_onboard_provider::{HodlarSignupClient, SignupClient};

use crate::adapters::{JsonAccountFile, LocalHostChannel};

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Platform-agnostic application state.
///
/// Holds the services and the `ServiceContext`. Every frontend constructs
/// this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (remote client + host channel)
    pub ctx: Arc<ServiceContext>,
    /// Persisted accounts and the active pointer
    pub account_store: Arc<AccountStore>,
    /// Signup state machine
    pub orchestrator: ProvisioningOrchestrator,
    /// Whether account restoration has completed
    pub restore_completed: AtomicBool,
}

impl AppState {
    /// Seed the account store from the host. Sets `restore_completed` when done.
    pub async fn run_account_restore(&self) {
        match self.account_store.restore().await {
            Ok(count) => log::info!("Account restoration complete: {count} account(s)"),
            Err(e) => log::error!("Failed to restore accounts: {e}"),
        }
        self.restore_completed.store(true, Ordering::SeqCst);
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `host_channel`, or call [`AppStateBuilder::with_local_host`]
///
/// # Optional
/// - `signup_client` - defaults to `HodlarSignupClient` built from the config
/// - `observer` - defaults to `NoopObserver`
pub struct AppStateBuilder {
    config: AppConfig,
    signup_client: Option<Arc<dyn SignupClient>>,
    host_channel: Option<Arc<dyn HostChannel>>,
    observer: Option<Arc<dyn ProvisioningObserver>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            signup_client: None,
            host_channel: None,
            observer: None,
        }
    }

    #[must_use]
    pub fn signup_client(mut self, client: Arc<dyn SignupClient>) -> Self {
        self.signup_client = Some(client);
        self
    }

    #[must_use]
    pub fn host_channel(mut self, host: Arc<dyn HostChannel>) -> Self {
        self.host_channel = Some(host);
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn ProvisioningObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Use a `LocalHostChannel` over `<data_dir>/accounts.json`.
    pub async fn with_local_host(self) -> AppResult<Self> {
        let accounts = Arc::new(JsonAccountFile::open(self.config.accounts_path()).await?);
        let host = LocalHostChannel::new(
            accounts,
            Duration::from_secs(self.config.request_timeout_secs),
        );
        Ok(self.host_channel(Arc::new(host)))
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `AppError::MissingAdapter` if no host channel was provided.
    pub fn build(self) -> AppResult<AppState> {
        let host_channel = self
            .host_channel
            .ok_or(AppError::MissingAdapter("host_channel"))?;
        let signup_client = self
            .signup_client
            .unwrap_or_else(|| Arc::new(HodlarSignupClient::new(self.config.hodlar())));
        let observer = self.observer.unwrap_or_else(|| Arc::new(NoopObserver));

        let ctx = Arc::new(ServiceContext::new(signup_client, host_channel));
        let account_store = Arc::new(AccountStore::new(&ctx));
        let orchestrator =
            ProvisioningOrchestrator::new(&ctx, Arc::clone(&account_store), observer)
                .with_orphan_policy(self.config.orphan_policy);

        Ok(AppState {
            ctx,
            account_store,
            orchestrator,
            restore_completed: AtomicBool::new(false),
        })
    }
}
