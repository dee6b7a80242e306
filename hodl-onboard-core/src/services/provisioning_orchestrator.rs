//! Provisioning orchestrator
//!
//! Runs one attempt as `signup → validate → add → select`, owning the
//! progress state and the single user-visible outcome of the attempt.

use std::sync::Arc;

use tokio::sync::watch;

use hodl_onboard_provider::CredentialBundle;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::services::{AccountStore, AccountValidator, CredentialClient, ServiceContext};
use crate::traits::ProvisioningObserver;
use crate::types::{
    Account, AccountId, OrphanPolicy, ProvisioningState, SignupRequest, Toast,
    TEST_CONNECTION_ROUTE,
};

/// Provisioning orchestrator
pub struct ProvisioningOrchestrator {
    credential_client: CredentialClient,
    validator: AccountValidator,
    store: Arc<AccountStore>,
    observer: Arc<dyn ProvisioningObserver>,
    orphan_policy: OrphanPolicy,
    state: watch::Sender<ProvisioningState>,
}

impl ProvisioningOrchestrator {
    #[must_use]
    pub fn new(
        ctx: &ServiceContext,
        store: Arc<AccountStore>,
        observer: Arc<dyn ProvisioningObserver>,
    ) -> Self {
        let (state, _) = watch::channel(ProvisioningState::Idle);
        Self {
            credential_client: CredentialClient::new(ctx),
            validator: AccountValidator::new(ctx),
            store,
            observer,
            orphan_policy: OrphanPolicy::default(),
            state,
        }
    }

    #[must_use]
    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    /// Current state of the attempt.
    pub fn state(&self) -> ProvisioningState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Watch every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ProvisioningState> {
        self.state.subscribe()
    }

    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    /// Provision a wallet for `identifier` and make it the active account.
    ///
    /// Returns the id of the new active account. Every failure has already
    /// been reported through exactly one toast when this returns. A refused
    /// concurrent submit leaves the running attempt's state untouched.
    pub async fn signup(&self, identifier: &str) -> ProvisioningResult<AccountId> {
        if self.is_loading() {
            return Err(self.refuse_busy());
        }

        let request = match SignupRequest::parse(identifier) {
            Ok(request) => request,
            Err(e) => {
                self.report(&e);
                return Err(e);
            }
        };

        if !self.claim() {
            return Err(self.refuse_busy());
        }

        let mut guard = AttemptGuard {
            orchestrator: self,
            armed: true,
        };
        let outcome = self.run(&request).await;
        guard.armed = false;

        match outcome {
            Ok(account_id) => {
                log::info!("Wallet for {} is active as {account_id}", request.as_str());
                self.transition(ProvisioningState::Succeeded {
                    account_id: account_id.clone(),
                });
                self.observer.on_navigate(TEST_CONNECTION_ROUTE);
                Ok(account_id)
            }
            Err(e) => {
                self.report(&e);
                self.transition(ProvisioningState::Failed { error: e.clone() });
                Err(e)
            }
        }
    }

    async fn run(&self, request: &SignupRequest) -> ProvisioningResult<AccountId> {
        let bundle = self.credential_client.create_account(request).await?;
        self.transition(ProvisioningState::Activating);
        self.activate(&bundle).await
    }

    /// validate → add → select. The first failure short-circuits the rest.
    async fn activate(&self, bundle: &CredentialBundle) -> ProvisioningResult<AccountId> {
        let account = Account::from_bundle(bundle);

        let validation = self.validator.validate(&account).await?;
        if !validation.valid {
            return Err(ProvisioningError::InvalidCredentials(
                validation.error.unwrap_or_default(),
            ));
        }

        let account_id = self.store.add(&account).await?;

        if let Err(e) = self.store.select(&account_id).await {
            self.handle_orphan(&account_id).await;
            return Err(e);
        }

        Ok(account_id)
    }

    async fn handle_orphan(&self, account_id: &AccountId) {
        match self.orphan_policy {
            OrphanPolicy::Keep => {
                log::warn!("Account {account_id} was stored but not selected; keeping it");
            }
            OrphanPolicy::Remove => {
                if let Err(e) = self.store.remove(account_id).await {
                    log::warn!("Failed to remove orphaned account {account_id}: {e}");
                }
            }
        }
    }

    /// Leave a non-loading state for `Submitting`. False when another attempt won.
    fn claim(&self) -> bool {
        let claimed = self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = ProvisioningState::Submitting;
                true
            }
        });
        if claimed {
            log::info!("Provisioning state: submitting");
            self.observer.on_state_changed(&ProvisioningState::Submitting);
            self.observer.on_loading_changed(true);
        }
        claimed
    }

    fn transition(&self, next: ProvisioningState) {
        let was_loading = self.state.send_replace(next.clone()).is_loading();
        log::info!("Provisioning state: {}", next.name());

        self.observer.on_state_changed(&next);
        if was_loading != next.is_loading() {
            self.observer.on_loading_changed(next.is_loading());
        }
    }

    fn refuse_busy(&self) -> ProvisioningError {
        let err = ProvisioningError::AttemptInProgress;
        self.report(&err);
        err
    }

    fn report(&self, err: &ProvisioningError) {
        if err.is_expected() {
            log::warn!("Provisioning failed: {err}");
        } else {
            log::error!("Provisioning failed: {err}");
        }
        self.observer.on_toast(&Toast::from(err));
    }
}

/// Returns the state to `Idle` if the attempt future is dropped mid-flight.
struct AttemptGuard<'a> {
    orchestrator: &'a ProvisioningOrchestrator,
    armed: bool,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("Provisioning attempt dropped before completion");
            self.orchestrator.transition(ProvisioningState::Idle);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use hodl_onboard_provider::ProviderError;

    use super::*;
    use crate::test_utils::{
        test_bundle, test_context, MockHostChannel, MockSignupClient, ObserverEvent,
        RecordingObserver,
    };
    use crate::traits::ValidateAccountResponse;
    use crate::types::ToastKind;

    struct Fixture {
        orchestrator: ProvisioningOrchestrator,
        signup: Arc<MockSignupClient>,
        host: Arc<MockHostChannel>,
        observer: Arc<RecordingObserver>,
    }

    fn fixture(signup: MockSignupClient) -> Fixture {
        let (ctx, signup, host) = test_context(signup);
        let observer = Arc::new(RecordingObserver::default());
        let store = Arc::new(AccountStore::new(&ctx));
        let orchestrator = ProvisioningOrchestrator::new(&ctx, store, observer.clone());
        Fixture {
            orchestrator,
            signup,
            host,
            observer,
        }
    }

    fn rejected(message: &str) -> MockSignupClient {
        MockSignupClient::failing(ProviderError::SignupRejected {
            provider: "hodlar".to_string(),
            message: message.to_string(),
        })
    }

    // Scenario A: happy path
    #[tokio::test]
    async fn happy_path_activates_new_account() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()));

        let id = f.orchestrator.signup("octocat").await.unwrap();

        assert_eq!(f.signup.calls().await, vec!["octocat".to_string()]);
        let added = f.host.add_calls().await;
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name, "octocat");
        assert_eq!(added[0].config.ln_address.as_deref(), Some("octocat@hodl.ar"));
        assert_eq!(f.host.select_calls().await, vec![id.clone()]);
        assert_eq!(f.orchestrator.store().active_account().await, Some(id.clone()));
        assert_eq!(
            f.orchestrator.state(),
            ProvisioningState::Succeeded { account_id: id }
        );
        assert!(f.observer.toasts().is_empty());
        assert_eq!(f.observer.navigations(), vec![TEST_CONNECTION_ROUTE.to_string()]);
    }

    // Scenario B: remote rejection
    #[tokio::test]
    async fn remote_rejection_makes_no_host_call() {
        let f = fixture(rejected("username taken"));

        let err = f.orchestrator.signup("octocat").await.unwrap_err();

        assert_eq!(err, ProvisioningError::RemoteRejected("username taken".into()));
        assert!(f.host.validate_calls().await.is_empty());
        assert!(f.host.add_calls().await.is_empty());
        let toasts = f.observer.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].detail.as_deref(), Some("username taken"));
        assert!(!f.orchestrator.is_loading());
        assert!(f.observer.navigations().is_empty());
    }

    // Scenario C: credentials fail validation
    #[tokio::test]
    async fn invalid_credentials_skip_persistence() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()));
        f.host
            .set_validate_response(Ok(ValidateAccountResponse {
                valid: false,
                error: Some("auth rejected".to_string()),
            }))
            .await;

        let err = f.orchestrator.signup("octocat").await.unwrap_err();

        assert_eq!(err, ProvisioningError::InvalidCredentials("auth rejected".into()));
        assert_eq!(f.host.validate_calls().await.len(), 1);
        assert!(f.host.add_calls().await.is_empty());
        assert!(f.host.select_calls().await.is_empty());
        let toasts = f.observer.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::ValidationFailure);
        assert_eq!(toasts[0].key, "common.errors.connection_failed");
        assert_eq!(toasts[0].detail.as_deref(), Some("auth rejected"));
    }

    // select fails after add, orphan kept
    #[tokio::test]
    async fn select_failure_keeps_orphan_by_default() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()));
        f.host
            .set_select_response(Err(ProvisioningError::HostChannelError(
                "port closed".to_string(),
            )))
            .await;

        let err = f.orchestrator.signup("octocat").await.unwrap_err();

        assert!(matches!(err, ProvisioningError::HostChannelError(_)));
        assert_eq!(f.host.add_calls().await.len(), 1);
        assert_eq!(f.host.stored_count().await, 1);
        assert!(f.host.remove_calls().await.is_empty());
        assert_eq!(f.orchestrator.store().active_account().await, None);
        assert_eq!(f.observer.toasts().len(), 1);
        assert!(matches!(f.orchestrator.state(), ProvisioningState::Failed { .. }));
    }

    #[tokio::test]
    async fn select_failure_removes_orphan_when_asked() {
        let (ctx, _, host) = test_context(MockSignupClient::succeeding(test_bundle()));
        let store = Arc::new(AccountStore::new(&ctx));
        let orchestrator = ProvisioningOrchestrator::new(
            &ctx,
            store,
            Arc::new(RecordingObserver::default()),
        )
        .with_orphan_policy(OrphanPolicy::Remove);
        host.set_select_response(Err(ProvisioningError::HostChannelError(
            "port closed".to_string(),
        )))
        .await;

        assert!(orchestrator.signup("octocat").await.is_err());

        assert_eq!(host.remove_calls().await.len(), 1);
        assert_eq!(host.stored_count().await, 0);
    }

    #[tokio::test]
    async fn loading_flag_tracks_in_flight_states() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()));

        f.orchestrator.signup("octocat").await.unwrap();

        let events = f.observer.events();
        let states: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                ObserverEvent::State(s) => Some(s.name()),
                _ => None,
            })
            .collect();
        assert_eq!(states, vec!["submitting", "activating", "succeeded"]);
        assert_eq!(f.observer.loading_changes(), vec![true, false]);
    }

    // Scenario D: transport error
    #[tokio::test]
    async fn loading_cleared_after_transport_failure() {
        let f = fixture(MockSignupClient::failing(ProviderError::NetworkError {
            provider: "hodlar".to_string(),
            detail: "connection refused".to_string(),
        }));

        let err = f.orchestrator.signup("octocat").await.unwrap_err();

        assert!(matches!(err, ProvisioningError::TransportError(_)));
        assert!(f.host.validate_calls().await.is_empty());
        assert!(f.host.add_calls().await.is_empty());
        assert!(f.host.select_calls().await.is_empty());
        assert!(matches!(f.orchestrator.state(), ProvisioningState::Failed { .. }));
        assert!(!f.orchestrator.is_loading());
        assert_eq!(f.observer.loading_changes(), vec![true, false]);
        let toasts = f.observer.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].key, "hodlar.errors.create_wallet_error");
    }

    #[tokio::test]
    async fn add_failure_skips_select() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()));
        f.host
            .set_add_response(Err(ProvisioningError::PersistenceError(
                "duplicate account".to_string(),
            )))
            .await;

        let err = f.orchestrator.signup("octocat").await.unwrap_err();

        assert_eq!(
            err,
            ProvisioningError::PersistenceError("duplicate account".into())
        );
        assert_eq!(f.host.validate_calls().await.len(), 1);
        assert_eq!(f.host.add_calls().await.len(), 1);
        assert!(f.host.select_calls().await.is_empty());
        assert_eq!(f.orchestrator.store().active_account().await, None);
        assert!(matches!(f.orchestrator.state(), ProvisioningState::Failed { .. }));
        assert!(!f.orchestrator.is_loading());
        assert_eq!(f.observer.toasts().len(), 1);
        assert!(f.observer.navigations().is_empty());
    }

    #[tokio::test]
    async fn invalid_identifier_is_toasted_without_leaving_idle() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()));

        let err = f.orchestrator.signup("  a ").await.unwrap_err();

        assert!(matches!(err, ProvisioningError::InvalidIdentifier(_)));
        assert!(f.signup.calls().await.is_empty());
        assert_eq!(f.orchestrator.state(), ProvisioningState::Idle);
        assert_eq!(f.observer.toasts().len(), 1);
        assert!(f.observer.loading_changes().is_empty());
    }

    #[tokio::test]
    async fn form_re_arms_after_failure() {
        let f = fixture(rejected("try later"));
        assert!(f.orchestrator.signup("octocat").await.is_err());

        f.signup.set_result(Ok(test_bundle())).await;
        assert!(f.orchestrator.signup("octocat").await.is_ok());

        assert_eq!(f.signup.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_submit_is_refused() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()).gated());
        let gate = f.signup.gate();

        let (first, second) = tokio::join!(f.orchestrator.signup("octocat"), async {
            let refused = f.orchestrator.signup("hubot").await;
            gate.notify_one();
            refused
        });

        assert!(first.is_ok());
        assert_eq!(second, Err(ProvisioningError::AttemptInProgress));
        assert_eq!(f.signup.calls().await, vec!["octocat".to_string()]);
        let toasts = f.observer.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].key, "hodlar.errors.attempt_in_progress");
    }

    #[tokio::test]
    async fn dropped_attempt_returns_to_idle() {
        let f = fixture(MockSignupClient::succeeding(test_bundle()).gated());
        let mut rx = f.orchestrator.subscribe();

        tokio::select! {
            biased;
            _ = f.orchestrator.signup("octocat") => panic!("gated signup completed"),
            () = async {} => {}
        }

        assert_eq!(f.orchestrator.state(), ProvisioningState::Idle);
        assert_eq!(f.observer.loading_changes(), vec![true, false]);
        assert_eq!(*rx.borrow_and_update(), ProvisioningState::Idle);
    }
}
