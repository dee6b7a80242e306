//! Local host adapters for the CLI front end.

mod json_store;
mod local_host;

pub use json_store::{JsonAccountFile, StoredAccount, MAX_FILE_SIZE};
pub use local_host::LocalHostChannel;
