//! 翻译键定义
//!
//! Toast keys emitted by the core (`hodlar.errors.*`, `common.errors.*`)
//! resolve to fields of these structs.

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hodlar: HodlarTexts,
}

pub struct CommonTexts {
    pub errors: CommonErrorTexts,
    pub no_accounts: &'static str,
    pub no_active_account: &'static str,
    pub active_marker: &'static str,
}

pub struct CommonErrorTexts {
    /// `common.errors.connection_failed`
    pub connection_failed: &'static str,
}

pub struct HodlarTexts {
    pub errors: HodlarErrorTexts,
    /// Shown while waiting for the signup service
    pub submitting: &'static str,
    /// Shown while validating and storing the account
    pub activating: &'static str,
    pub succeeded: &'static str,
    pub next_step: &'static str,
    pub profile_hint: &'static str,
}

pub struct HodlarErrorTexts {
    /// `hodlar.errors.create_wallet_error`
    pub create_wallet_error: &'static str,
    /// `hodlar.errors.remote_rejected`
    pub remote_rejected: &'static str,
    /// `hodlar.errors.invalid_identifier`
    pub invalid_identifier: &'static str,
    /// `hodlar.errors.attempt_in_progress`
    pub attempt_in_progress: &'static str,
}
