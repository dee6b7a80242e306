//! Connector factory functions.

use std::sync::Arc;
use std::time::Duration;

use crate::providers::LndhubConnector;
use crate::traits::WalletConnector;
use crate::types::ConnectorCredentials;

/// Creates a [`WalletConnector`] instance from the given credentials.
///
/// The concrete connector is determined by the [`ConnectorCredentials`]
/// variant. The returned connector is wrapped in `Arc<dyn WalletConnector>`
/// for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use hodl_onboard_provider::{create_connector, ConnectorCredentials, LndhubCredentials};
///
/// let connector = create_connector(
///     ConnectorCredentials::Lndhub(LndhubCredentials {
///         login: "login".to_string(),
///         password: "password".to_string(),
///         url: "https://lndhub.io".to_string(),
///     }),
///     Duration::from_secs(30),
/// );
/// ```
pub fn create_connector(
    credentials: ConnectorCredentials,
    request_timeout: Duration,
) -> Arc<dyn WalletConnector> {
    match credentials {
        ConnectorCredentials::Lndhub(creds) => {
            Arc::new(LndhubConnector::with_timeout(creds, request_timeout))
        }
    }
}
