//! Signup request

use serde::Serialize;

use crate::error::{ProvisioningError, ProvisioningResult};

/// Shortest accepted GitHub username.
pub const IDENTIFIER_MIN_LEN: usize = 3;
/// Longest accepted GitHub username.
pub const IDENTIFIER_MAX_LEN: usize = 39;

/// One submit of the signup form. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "github")]
    external_identifier: String,
}

impl SignupRequest {
    /// Trim the raw field value and check it against `[a-zA-Z0-9-]{3,39}`.
    pub fn parse(input: &str) -> ProvisioningResult<Self> {
        let identifier = input.trim();
        let len = identifier.chars().count();

        if identifier.is_empty() {
            return Err(ProvisioningError::InvalidIdentifier(
                "identifier must not be empty".to_string(),
            ));
        }
        if !(IDENTIFIER_MIN_LEN..=IDENTIFIER_MAX_LEN).contains(&len) {
            return Err(ProvisioningError::InvalidIdentifier(format!(
                "'{identifier}' must be {IDENTIFIER_MIN_LEN}-{IDENTIFIER_MAX_LEN} characters long"
            )));
        }
        if let Some(c) = identifier
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(ProvisioningError::InvalidIdentifier(format!(
                "'{identifier}' contains '{c}'; only letters, digits and '-' are allowed"
            )));
        }

        Ok(Self {
            external_identifier: identifier.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.external_identifier
    }

    /// Public file the signup service reads to link the GitHub identity.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}/.hodl.ar", self.external_identifier)
    }
}
