//! Log sanitization utilities
//!
//! Keeps wallet secrets (LNDHub passwords, access tokens) and oversized
//! response bodies out of debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters kept visible by [`mask_secret`].
const MASK_VISIBLE_PREFIX: usize = 2;

/// Secrets shorter than this are masked without a visible prefix.
const MASK_MIN_REVEAL_LEN: usize = 8;

/// Fixed-width mask; its length never depends on the secret.
const MASK: &str = "********";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret for logging, keeping only a short prefix.
///
/// `"supersecret"` becomes `"su********"`. The mask has a fixed width, and
/// secrets shorter than `MASK_MIN_REVEAL_LEN` show no prefix at all.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() < MASK_MIN_REVEAL_LEN {
        return MASK.to_string();
    }
    let prefix: String = secret.chars().take(MASK_VISIBLE_PREFIX).collect();
    format!("{prefix}{MASK}")
}
