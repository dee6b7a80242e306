//! Remote service implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod hodlar;
mod lndhub;

pub use hodlar::{DEFAULT_CLIENT_ID, DEFAULT_SIGNUP_URL, HodlarConfig, HodlarSignupClient};
pub use lndhub::LndhubConnector;
