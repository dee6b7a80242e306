//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use hodl_onboard_provider::ProviderError;

use crate::types::ToastKind;

/// Closed set of provisioning failures.
///
/// Every variant is terminal for the current attempt; none is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ProvisioningError {
    /// The identifier does not match `[a-zA-Z0-9-]{3,39}`
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A submit arrived while another attempt was loading
    #[error("A provisioning attempt is already in progress")]
    AttemptInProgress,

    /// Network or decode failure talking to the signup service
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The signup service declined, with its own message
    #[error("{0}")]
    RemoteRejected(String),

    /// The signup service reported success without a usable credential bundle
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The host message channel itself failed
    #[error("Host channel error: {0}")]
    HostChannelError(String),

    /// The validator reported the credential set as unusable
    #[error("{0}")]
    InvalidCredentials(String),

    /// The account store rejected the write
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// `select` referenced an id that was never added
    #[error("Unknown account: {0}")]
    UnknownAccountError(String),
}

impl ProvisioningError {
    /// Whether it is expected behavior (user input, remote refusal), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier(_)
                | Self::AttemptInProgress
                | Self::RemoteRejected(_)
                | Self::InvalidCredentials(_)
        )
    }

    /// Which toast surface reports this error.
    #[must_use]
    pub fn toast_kind(&self) -> ToastKind {
        match self {
            Self::InvalidCredentials(_) => ToastKind::ValidationFailure,
            _ => ToastKind::Error,
        }
    }

    /// Translation key of the localized prefix shown before the raw detail.
    #[must_use]
    pub fn toast_key(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "hodlar.errors.invalid_identifier",
            Self::AttemptInProgress => "hodlar.errors.attempt_in_progress",
            Self::TransportError(_) | Self::MalformedResponse(_) => {
                "hodlar.errors.create_wallet_error"
            }
            Self::RemoteRejected(_) => "hodlar.errors.remote_rejected",
            Self::HostChannelError(_)
            | Self::InvalidCredentials(_)
            | Self::PersistenceError(_)
            | Self::UnknownAccountError(_) => "common.errors.connection_failed",
        }
    }

    /// Raw error detail carried by the variant, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::AttemptInProgress => None,
            Self::InvalidIdentifier(d)
            | Self::TransportError(d)
            | Self::RemoteRejected(d)
            | Self::MalformedResponse(d)
            | Self::HostChannelError(d)
            | Self::InvalidCredentials(d)
            | Self::PersistenceError(d)
            | Self::UnknownAccountError(d) => Some(d),
        }
    }
}

impl From<ProviderError> for ProvisioningError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::SignupRejected { message, .. } => Self::RemoteRejected(message),
            ProviderError::MalformedResponse { detail, .. } => Self::MalformedResponse(detail),
            ProviderError::InvalidParameter { detail, .. } => Self::InvalidIdentifier(detail),
            ProviderError::InvalidCredentials { raw_message, .. } => Self::InvalidCredentials(
                raw_message.unwrap_or_else(|| "credentials refused".to_string()),
            ),
            ProviderError::Unknown { raw_message, .. } => Self::RemoteRejected(raw_message),
            e @ (ProviderError::NetworkError { .. }
            | ProviderError::Timeout { .. }
            | ProviderError::ParseError { .. }) => Self::TransportError(e.to_string()),
        }
    }
}

/// Core layer Result type alias
pub type ProvisioningResult<T> = std::result::Result<T, ProvisioningError>;
