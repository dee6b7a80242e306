//! Provisioning state machine types

use serde::{Deserialize, Serialize};

use crate::error::ProvisioningError;
use crate::types::AccountId;

/// Route the UI navigates to after a successful attempt.
pub const TEST_CONNECTION_ROUTE: &str = "/test-connection";

/// State of the current provisioning attempt.
///
/// `Succeeded` and `Failed` are terminal per attempt and re-arm the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ProvisioningState {
    Idle,
    /// Waiting for the signup service
    Submitting,
    /// Running validate → add → select
    Activating,
    Succeeded { account_id: AccountId },
    Failed { error: ProvisioningError },
}

impl ProvisioningState {
    /// The loading indicator is on exactly while a step is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting | Self::Activating)
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Activating => "activating",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }
}

/// The two toast surfaces of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToastKind {
    /// The wallet was created but its credentials did not validate
    ValidationFailure,
    /// Any other failure
    Error,
}

/// A user-visible error notification.
///
/// `key` names the localized prefix; `detail` is the raw error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub key: &'static str,
    pub detail: Option<String>,
}

impl From<&ProvisioningError> for Toast {
    fn from(err: &ProvisioningError) -> Self {
        Self {
            kind: err.toast_kind(),
            key: err.toast_key(),
            detail: err.detail().map(ToString::to_string),
        }
    }
}

/// What to do with an account that was added but could not be selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Leave it in the store
    #[default]
    Keep,
    /// Best-effort compensating delete
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_only_while_in_flight() {
        assert!(!ProvisioningState::Idle.is_loading());
        assert!(ProvisioningState::Submitting.is_loading());
        assert!(ProvisioningState::Activating.is_loading());
        assert!(!ProvisioningState::Succeeded {
            account_id: AccountId::new("1")
        }
        .is_loading());
        assert!(!ProvisioningState::Failed {
            error: ProvisioningError::TransportError("x".into())
        }
        .is_loading());
    }

    #[test]
    fn toast_from_error() {
        let toast = Toast::from(&ProvisioningError::InvalidCredentials("auth rejected".into()));
        assert_eq!(toast.kind, ToastKind::ValidationFailure);
        assert_eq!(toast.key, "common.errors.connection_failed");
        assert_eq!(toast.detail.as_deref(), Some("auth rejected"));
    }
}
