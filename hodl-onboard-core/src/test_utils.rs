//! Recording mocks shared by the service tests.

use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use hodl_onboard_provider::{
    CredentialBundle, LndhubCredentials, ProviderError, SignupClient,
};

use crate::error::ProvisioningResult;
use crate::services::ServiceContext;
use crate::traits::{
    AddAccountResponse, HostChannel, ProvisioningObserver, SelectAccountRequest,
    ValidateAccountResponse,
};
use crate::types::{Account, AccountId, AccountSummary, ConnectorType, ProvisioningState, Toast};

pub fn test_bundle() -> CredentialBundle {
    CredentialBundle {
        username: Some("octocat".to_string()),
        handle: "octocat".to_string(),
        ln_address: "octocat@hodl.ar".to_string(),
        lnbit_user: Some("lnbits-user".to_string()),
        endpoint: None,
        wallet_url: None,
        lndhub: LndhubCredentials {
            login: "login".to_string(),
            password: "password".to_string(),
            url: "https://lndhub.hodl.ar".to_string(),
        },
    }
}

pub fn test_account() -> Account {
    Account::from_bundle(&test_bundle())
}

pub fn test_context(
    signup: MockSignupClient,
) -> (ServiceContext, Arc<MockSignupClient>, Arc<MockHostChannel>) {
    let signup = Arc::new(signup);
    let host = Arc::new(MockHostChannel::default());
    let ctx = ServiceContext::new(signup.clone(), host.clone());
    (ctx, signup, host)
}

// ===== Signup client =====

pub struct MockSignupClient {
    result: Mutex<Result<CredentialBundle, ProviderError>>,
    calls: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl MockSignupClient {
    pub fn succeeding(bundle: CredentialBundle) -> Self {
        Self::with_result(Ok(bundle))
    }

    pub fn failing(err: ProviderError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<CredentialBundle, ProviderError>) -> Self {
        Self {
            result: Mutex::new(result),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Block every call until [`Self::gate`] is notified.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone().expect("client is not gated")
    }

    pub async fn set_result(&self, result: Result<CredentialBundle, ProviderError>) {
        *self.result.lock().await = result;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl SignupClient for MockSignupClient {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_account(&self, identifier: &str) -> hodl_onboard_provider::Result<CredentialBundle> {
        self.calls.lock().await.push(identifier.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.lock().await.clone()
    }
}

// ===== Host channel =====

struct HostState {
    validate_response: ProvisioningResult<ValidateAccountResponse>,
    add_response: Option<ProvisioningResult<AddAccountResponse>>,
    select_response: ProvisioningResult<()>,
    accounts: Vec<AccountSummary>,
    current: Option<AccountId>,
    next_id: u32,
    validate_calls: Vec<Account>,
    add_calls: Vec<Account>,
    select_calls: Vec<AccountId>,
    remove_calls: Vec<AccountId>,
}

/// In-memory host. `add` assigns `acc-<n>` ids unless a response is forced.
pub struct MockHostChannel {
    state: Mutex<HostState>,
}

impl Default for MockHostChannel {
    fn default() -> Self {
        Self {
            state: Mutex::new(HostState {
                validate_response: Ok(ValidateAccountResponse {
                    valid: true,
                    error: None,
                }),
                add_response: None,
                select_response: Ok(()),
                accounts: Vec::new(),
                current: None,
                next_id: 1,
                validate_calls: Vec::new(),
                add_calls: Vec::new(),
                select_calls: Vec::new(),
                remove_calls: Vec::new(),
            }),
        }
    }
}

impl MockHostChannel {
    pub async fn set_validate_response(&self, r: ProvisioningResult<ValidateAccountResponse>) {
        self.state.lock().await.validate_response = r;
    }

    pub async fn set_add_response(&self, r: ProvisioningResult<AddAccountResponse>) {
        self.state.lock().await.add_response = Some(r);
    }

    pub async fn set_select_response(&self, r: ProvisioningResult<()>) {
        self.state.lock().await.select_response = r;
    }

    pub async fn seed_account(&self, id: AccountId, name: &str) {
        self.state.lock().await.accounts.push(AccountSummary {
            id,
            name: name.to_string(),
            connector: ConnectorType::Lndhub,
            ln_address: None,
        });
    }

    pub async fn set_current(&self, id: Option<AccountId>) {
        self.state.lock().await.current = id;
    }

    pub async fn stored_count(&self) -> usize {
        self.state.lock().await.accounts.len()
    }

    pub async fn validate_calls(&self) -> Vec<Account> {
        self.state.lock().await.validate_calls.clone()
    }

    pub async fn add_calls(&self) -> Vec<Account> {
        self.state.lock().await.add_calls.clone()
    }

    pub async fn select_calls(&self) -> Vec<AccountId> {
        self.state.lock().await.select_calls.clone()
    }

    pub async fn remove_calls(&self) -> Vec<AccountId> {
        self.state.lock().await.remove_calls.clone()
    }
}

#[async_trait]
impl HostChannel for MockHostChannel {
    async fn validate_account(
        &self,
        account: &Account,
    ) -> ProvisioningResult<ValidateAccountResponse> {
        let mut state = self.state.lock().await;
        state.validate_calls.push(account.clone());
        state.validate_response.clone()
    }

    async fn add_account(&self, account: &Account) -> ProvisioningResult<AddAccountResponse> {
        let mut state = self.state.lock().await;
        state.add_calls.push(account.clone());
        if let Some(forced) = state.add_response.clone() {
            return forced;
        }

        let id = AccountId::new(format!("acc-{}", state.next_id));
        state.next_id += 1;
        state.accounts.push(AccountSummary {
            id: id.clone(),
            name: account.name.clone(),
            connector: account.connector,
            ln_address: account.config.ln_address.clone(),
        });
        Ok(AddAccountResponse {
            account_id: Some(id),
        })
    }

    async fn select_account(&self, request: &SelectAccountRequest) -> ProvisioningResult<()> {
        let mut state = self.state.lock().await;
        state.select_calls.push(request.id.clone());
        state.select_response.clone()?;
        state.current = Some(request.id.clone());
        Ok(())
    }

    async fn remove_account(&self, id: &AccountId) -> ProvisioningResult<()> {
        let mut state = self.state.lock().await;
        state.remove_calls.push(id.clone());
        state.accounts.retain(|a| &a.id != id);
        Ok(())
    }

    async fn list_accounts(&self) -> ProvisioningResult<Vec<AccountSummary>> {
        Ok(self.state.lock().await.accounts.clone())
    }

    async fn current_account_id(&self) -> ProvisioningResult<Option<AccountId>> {
        Ok(self.state.lock().await.current.clone())
    }
}

// ===== Observer =====

#[derive(Debug, Clone, PartialEq)]
pub enum ObserverEvent {
    State(ProvisioningState),
    Loading(bool),
    Toast(Toast),
    Navigate(String),
}

#[derive(Default)]
pub struct RecordingObserver {
    events: StdMutex<Vec<ObserverEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ObserverEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ObserverEvent::Toast(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn loading_changes(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ObserverEvent::Loading(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ObserverEvent::Navigate(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ObserverEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProvisioningObserver for RecordingObserver {
    fn on_state_changed(&self, state: &ProvisioningState) {
        self.push(ObserverEvent::State(state.clone()));
    }

    fn on_loading_changed(&self, loading: bool) {
        self.push(ObserverEvent::Loading(loading));
    }

    fn on_toast(&self, toast: &Toast) {
        self.push(ObserverEvent::Toast(toast.clone()));
    }

    fn on_navigate(&self, route: &str) {
        self.push(ObserverEvent::Navigate(route.to_string()));
    }
}
