//! Host and UI boundary trait definitions

mod host_channel;
mod provisioning_observer;

pub use host_channel::{
    AddAccountResponse, HostChannel, SelectAccountRequest, ValidateAccountResponse,
};
pub use provisioning_observer::{NoopObserver, ProvisioningObserver};
