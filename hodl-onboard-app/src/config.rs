//! Application configuration
//!
//! Read from `<data_dir>/config.json` when present. The signup URL can be
//! overridden with `HODL_CREATE_URL` and the data directory with
//! `HODL_ONBOARD_DATA_DIR`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hodl_onboard_core::types::OrphanPolicy;
use hodl_onboard_provider::{
    HodlarConfig, DEFAULT_CLIENT_ID, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SIGNUP_URL,
};

use crate::error::{AppError, AppResult};

/// Overrides the signup endpoint
pub const ENV_SIGNUP_URL: &str = "HODL_CREATE_URL";
/// Overrides the data directory
pub const ENV_DATA_DIR: &str = "HODL_ONBOARD_DATA_DIR";

const CONFIG_FILE: &str = "config.json";
const APP_DIR_NAME: &str = "hodl-onboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub signup_url: String,
    /// Sent as `X-User-Agent`
    pub client_id: String,
    pub request_timeout_secs: u64,
    /// Directory holding `config.json` and `accounts.json`
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub orphan_policy: OrphanPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            data_dir: default_data_dir(),
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// `data_dir` wins over `HODL_ONBOARD_DATA_DIR`, which wins over the
    /// platform default.
    pub fn load(data_dir: Option<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir
            .or_else(|| std::env::var_os(ENV_DATA_DIR).map(PathBuf::from))
            .unwrap_or_else(default_data_dir);
        let signup_url = std::env::var(ENV_SIGNUP_URL).ok();
        Self::load_from(&data_dir, signup_url)
    }

    fn load_from(data_dir: &Path, signup_url_override: Option<String>) -> AppResult<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Loading configuration from {}", path.display());
                serde_json::from_str(&text).map_err(|e| AppError::json(&path, e))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(AppError::io(&path, e)),
        };

        if let Some(url) = signup_url_override.filter(|u| !u.trim().is_empty()) {
            log::info!("Signup URL overridden by {ENV_SIGNUP_URL}");
            config.signup_url = url;
        }
        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    /// Settings for the HODL.ar signup client.
    #[must_use]
    pub fn hodlar(&self) -> HodlarConfig {
        HodlarConfig {
            signup_url: self.signup_url.clone(),
            client_id: self.client_id.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }

    #[must_use]
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(crate::adapters::JsonAccountFile::FILE_NAME)
    }
}

/// `<platform local data dir>/hodl-onboard`, or `./.hodl-onboard` when the
/// platform has none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}
