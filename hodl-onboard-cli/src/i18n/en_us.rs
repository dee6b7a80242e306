//! 英文翻译 (en-US)

use super::keys::{
    CommonErrorTexts, CommonTexts, HodlarErrorTexts, HodlarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        errors: CommonErrorTexts {
            connection_failed: "Connection failed",
        },
        no_accounts: "No accounts yet. Run `hodl-onboard signup <github>` to create one.",
        no_active_account: "No active account",
        active_marker: "*",
    },
    hodlar: HodlarTexts {
        errors: HodlarErrorTexts {
            create_wallet_error: "Could not create the wallet",
            remote_rejected: "HODL.ar refused to create the wallet",
            invalid_identifier: "Invalid GitHub username",
            attempt_in_progress: "A wallet is already being created",
        },
        submitting: "Creating wallet...",
        activating: "Validating and saving the account...",
        succeeded: "Wallet ready",
        next_step: "Next: test the connection",
        profile_hint: "HODL.ar reads",
    },
};
