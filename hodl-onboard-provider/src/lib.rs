//! # hodl-onboard-provider
//!
//! Remote collaborators of the HODL.ar wallet onboarding flow.
//!
//! ## Services
//!
//! | Service | Type | Purpose |
//! |---------|------|---------|
//! | [HODL.ar](https://hodl.ar/) signup | [`HodlarSignupClient`] | Exchange a GitHub username for a freshly provisioned wallet |
//! | LNDHub | [`LndhubConnector`] | Check that a login / password / url triple opens a session |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use hodl_onboard_provider::{
//!     create_connector, ConnectorCredentials, HodlarConfig, HodlarSignupClient, SignupClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Provision a wallet
//!     let client = HodlarSignupClient::new(HodlarConfig::default());
//!     let bundle = client.create_account("octocat").await?;
//!
//!     // 2. Check the generated LNDHub credentials
//!     let connector = create_connector(
//!         ConnectorCredentials::Lndhub(bundle.lndhub.clone()),
//!         Duration::from_secs(30),
//!     );
//!     connector.validate_credentials().await?;
//!
//!     println!("{} is ready at {}", bundle.handle, bundle.ln_address);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::SignupRejected`] - the signup service said no (message from the server)
//! - [`ProviderError::MalformedResponse`] - success envelope without a usable bundle
//! - [`ProviderError::InvalidCredentials`] - LNDHub refused the login
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] / [`ProviderError::ParseError`] - transport
//!
//! Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_connector;

// Re-export public traits only (internal traits are not exported)
pub use traits::{SignupClient, WalletConnector};

// Re-export types
pub use types::{
    ConnectorCredentials, ConnectorType, CredentialBundle, LndhubCredentials, SignupBody,
    SignupEnvelope,
};

// Re-export log helpers for downstream crates
pub use utils::log_sanitizer;

// Re-export concrete services
pub use providers::{
    DEFAULT_CLIENT_ID, DEFAULT_SIGNUP_URL, HodlarConfig, HodlarSignupClient, LndhubConnector,
};
pub use providers::common::DEFAULT_REQUEST_TIMEOUT_SECS;
