//! UI boundary of the provisioning flow

use crate::types::{ProvisioningState, Toast};

/// Receives progress from the orchestrator.
///
/// Callbacks run inline on the provisioning task and must not block.
pub trait ProvisioningObserver: Send + Sync {
    /// Every state transition, including the terminal one
    fn on_state_changed(&self, _state: &ProvisioningState) {}

    /// Loading indicator flipped
    fn on_loading_changed(&self, _loading: bool) {}

    /// Exactly one toast per failed attempt
    fn on_toast(&self, _toast: &Toast) {}

    /// Forward navigation after success
    fn on_navigate(&self, _route: &str) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl ProvisioningObserver for NoopObserver {}
