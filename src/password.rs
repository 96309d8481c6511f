//! Password strength heuristic.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Highest possible [`score`].
pub const MAX_SCORE: u8 = 6;

/// Score a password from 0 to [`MAX_SCORE`].
///
/// One point each for: at least 8 characters, at least 12 characters, an
/// ASCII lowercase letter, an ASCII uppercase letter, an ASCII digit, and any
/// character outside `[A-Za-z0-9]`.
///
/// Length is measured in UTF-16 code units, the same as the input's DOM value
/// length, so a character outside the BMP counts twice.
pub fn score(password: &str) -> u8 {
    let len = password.encode_utf16().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().map(u8::from).sum()
}
