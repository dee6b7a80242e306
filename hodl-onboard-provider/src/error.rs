use serde::{Deserialize, Serialize};

/// Unified error type for all remote provider operations.
///
/// Each variant includes a `provider` field identifying which remote service
/// produced the error (`"hodlar"` for the signup service, `"lndhub"` for the
/// wallet backend), plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// No variant is retried automatically: the signup call is a one-shot
/// operation and a second request could provision a second wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The response body was not valid JSON, or not the expected envelope.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The signup service answered `success: false`.
    SignupRejected {
        /// Provider that produced the error.
        provider: String,
        /// Human-readable message supplied by the server.
        message: String,
    },

    /// The envelope reported success but its payload lacks required fields.
    MalformedResponse {
        /// Provider that produced the error.
        provider: String,
        /// Which part of the payload was missing or ill-typed.
        detail: String,
    },

    /// The provided wallet credentials were refused.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (e.g., empty identifier, unparsable URL).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is caused by user input or a remote refusal rather
    /// than by infrastructure. Used to choose between `warn` and `error` logs.
    ///
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::SignupRejected { .. }
                | Self::InvalidCredentials { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the failure happened on the way to or from the remote service
    /// (no usable answer was received).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::ParseError { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SignupRejected { provider, message } => {
                write!(f, "[{provider}] Signup rejected: {message}")
            }
            Self::MalformedResponse { provider, detail } => {
                write!(f, "[{provider}] Malformed response: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "hodlar".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[hodlar] Network error: connection refused");
    }

    #[test]
    fn display_signup_rejected() {
        let e = ProviderError::SignupRejected {
            provider: "hodlar".to_string(),
            message: "username taken".to_string(),
        };
        assert_eq!(e.to_string(), "[hodlar] Signup rejected: username taken");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "lndhub".to_string(),
            raw_message: Some("bad auth".to_string()),
        };
        assert_eq!(e.to_string(), "[lndhub] Invalid credentials: bad auth");
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "lndhub".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[lndhub] Invalid credentials");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = ProviderError::InvalidParameter {
            provider: "hodlar".to_string(),
            param: "github".to_string(),
            detail: "must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[hodlar] Invalid parameter 'github': must not be empty"
        );
    }

    #[test]
    fn expected_classification() {
        let rejected = ProviderError::SignupRejected {
            provider: "hodlar".to_string(),
            message: "nope".to_string(),
        };
        let timeout = ProviderError::Timeout {
            provider: "hodlar".to_string(),
            detail: "30s".to_string(),
        };
        assert!(rejected.is_expected());
        assert!(!rejected.is_transport());
        assert!(!timeout.is_expected());
        assert!(timeout.is_transport());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::MalformedResponse {
            provider: "hodlar".to_string(),
            detail: "missing field `lndhub`".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "MalformedResponse");
        assert_eq!(json["provider"], "hodlar");
    }
}
