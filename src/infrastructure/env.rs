//! Process environment access

/// Canvus server URL.
pub const CANVUS_URL: &str = "CANVUS_URL";

/// Pre-issued Canvus API key.
pub const CANVUS_API_KEY: &str = "CANVUS_API_KEY";

/// Reject unknown subcommands when truthy.
pub const CANVUS_STRICT: &str = "CANVUS_STRICT";

/// Value of `name` if set and non-empty.
///
/// Values that are not valid UTF-8 count as unset.
pub fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Value of `name` if set and non-empty, otherwise `default`.
pub fn resolve(name: &str, default: &str) -> String {
    lookup(name).unwrap_or_else(|| default.to_string())
}
