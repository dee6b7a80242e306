//! Terminal rendering of provisioning progress

use hodl_onboard_core::traits::ProvisioningObserver;
use hodl_onboard_core::types::{ProvisioningState, Toast, ToastKind, TEST_CONNECTION_ROUTE};

use crate::i18n::{t, toast_prefix};

/// Prints progress and toasts to stderr.
pub struct TerminalObserver;

impl ProvisioningObserver for TerminalObserver {
    fn on_state_changed(&self, state: &ProvisioningState) {
        let t = t();
        match state {
            ProvisioningState::Submitting => eprintln!("{}", t.hodlar.submitting),
            ProvisioningState::Activating => eprintln!("{}", t.hodlar.activating),
            ProvisioningState::Succeeded { account_id } => {
                eprintln!("{} ({account_id})", t.hodlar.succeeded);
            }
            ProvisioningState::Idle | ProvisioningState::Failed { .. } => {}
        }
    }

    fn on_loading_changed(&self, loading: bool) {
        tracing::debug!(loading, "loading indicator");
    }

    fn on_toast(&self, toast: &Toast) {
        eprintln!("{}", format_toast(toast));
    }

    fn on_navigate(&self, route: &str) {
        if route == TEST_CONNECTION_ROUTE {
            eprintln!("{}", t().hodlar.next_step);
        } else {
            tracing::debug!(route, "navigate");
        }
    }
}

/// `<marker> <localized prefix>: <raw detail>`
pub fn format_toast(toast: &Toast) -> String {
    let marker = match toast.kind {
        ToastKind::ValidationFailure => "!",
        ToastKind::Error => "x",
    };
    let prefix = toast_prefix(toast.key);
    match toast.detail.as_deref() {
        Some(detail) if !detail.is_empty() => format!("{marker} {prefix}: {detail}"),
        _ => format!("{marker} {prefix}"),
    }
}
