//! Credential masking for display

/// Shown in place of a secret that is empty or absent.
pub const NOT_SET: &str = "(not set)";

/// Replaces the redacted part of a secret.
pub const REDACTED: &str = "****";

/// Secrets at or below this many characters are fully redacted.
const REVEAL_THRESHOLD: usize = 8;

/// Characters kept visible at each end of a long secret.
const VISIBLE_EDGE: usize = 4;

/// Mask a secret for display.
///
/// - empty: `(not set)`
/// - up to 8 characters: `****`
/// - longer: first 4 characters, `****`, last 4 characters
///
/// Lengths count `char`s, so multibyte input is never split.
pub fn mask(secret: &str) -> String {
    let len = secret.chars().count();
    if len == 0 {
        return NOT_SET.to_string();
    }
    if len <= REVEAL_THRESHOLD {
        return REDACTED.to_string();
    }

    let head: String = secret.chars().take(VISIBLE_EDGE).collect();
    let tail: String = secret.chars().skip(len - VISIBLE_EDGE).collect();
    format!("{head}{REDACTED}{tail}")
}
