//! 共享测试工具和辅助函数

#![allow(dead_code)]

use hodl_onboard_provider::{HodlarConfig, HodlarSignupClient, LndhubCredentials};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Path the signup client posts to on the mock server.
pub const SIGNUP_PATH: &str = "/api/users/create";

/// Build a signup client pointed at a mock server.
pub fn signup_client(server_url: &str) -> HodlarSignupClient {
    HodlarSignupClient::new(HodlarConfig {
        signup_url: format!("{server_url}{SIGNUP_PATH}"),
        ..HodlarConfig::default()
    })
}

/// Successful signup envelope for `handle`.
pub fn success_body(handle: &str) -> String {
    serde_json::json!({
        "success": true,
        "message": "created",
        "data": {
            "username": handle,
            "handle": handle,
            "lnAddress": format!("{handle}@ln"),
            "lnbitUser": "lnbits-user",
            "endpoint": "https://hodl.ar/api",
            "walletUrl": "https://hodl.ar/wallet",
            "lndhub": { "login": "L", "password": "P", "url": "U" }
        }
    })
    .to_string()
}

/// LNDHub credentials pointed at a mock server.
pub fn lndhub_credentials(server_url: &str) -> LndhubCredentials {
    LndhubCredentials {
        login: "login".to_string(),
        password: "password".to_string(),
        url: server_url.to_string(),
    }
}
