//! Build metadata embedded at compile time
//!
//! Values come from `CANVUS_VERSION`, `CANVUS_COMMIT` and `CANVUS_BUILD_DATE`
//! in the build environment (see `build.rs`).

use std::fmt;

/// Release metadata fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

/// Metadata of the running binary.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: or_default(option_env!("CANVUS_VERSION"), "dev"),
    commit: or_default(option_env!("CANVUS_COMMIT"), "none"),
    date: or_default(option_env!("CANVUS_BUILD_DATE"), "unknown"),
};

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "canvus version {}", self.version)?;
        writeln!(f, "  commit: {}", self.commit)?;
        write!(f, "  built:  {}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_value_when_or_default_then_returns_default() {
        assert_eq!(or_default(None, "dev"), "dev");
        assert_eq!(or_default(Some(""), "none"), "none");
        assert_eq!(or_default(Some("1.2.0"), "dev"), "1.2.0");
    }

    #[test]
    fn given_build_info_when_displayed_then_prints_labelled_lines() {
        let info = BuildInfo {
            version: "1.2.0",
            commit: "abc1234",
            date: "2026-01-01T00:00:00Z",
        };

        let rendered = info.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "canvus version 1.2.0",
                "  commit: abc1234",
                "  built:  2026-01-01T00:00:00Z",
            ]
        );
    }

    #[test]
    fn given_current_build_when_inspected_then_no_field_is_empty() {
        assert!(!BUILD_INFO.version.is_empty());
        assert!(!BUILD_INFO.commit.is_empty());
        assert!(!BUILD_INFO.date.is_empty());
    }
}
