//! 国际化（i18n）模块
//!
//! Compile-time translation table. Only en-US ships today.

mod en_us;
pub mod keys;

pub use keys::Translations;

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    &en_us::TRANSLATIONS
}

/// Localized prefix for a toast key. Unknown keys fall back to the generic
/// connection error.
pub fn toast_prefix(key: &str) -> &'static str {
    let t = t();
    match key {
        "hodlar.errors.create_wallet_error" => t.hodlar.errors.create_wallet_error,
        "hodlar.errors.remote_rejected" => t.hodlar.errors.remote_rejected,
        "hodlar.errors.invalid_identifier" => t.hodlar.errors.invalid_identifier,
        "hodlar.errors.attempt_in_progress" => t.hodlar.errors.attempt_in_progress,
        _ => t.common.errors.connection_failed,
    }
}
