//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config`/`CANVUS_CONFIG`, else `$XDG_CONFIG_HOME/canvus/canvus.toml`
//! 3. Environment variables: `CANVUS_URL`, `CANVUS_API_KEY`, `CANVUS_STRICT`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ApiKey;
use crate::infrastructure::env::{self, CANVUS_API_KEY, CANVUS_STRICT, CANVUS_URL};

/// Raw file settings (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub url: Option<String>,
    pub api_key: Option<ApiKey>,
    pub strict: Option<bool>,
}

/// Effective configuration for canvus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Canvus server URL
    pub url: Option<String>,
    /// Pre-issued API key (masked in `Debug`)
    pub api_key: Option<ApiKey>,
    /// Reject unknown subcommands
    pub strict: bool,
    /// Config file consulted, if any
    pub config_file: Option<PathBuf>,
    /// Whether `config_file` existed and was read
    pub config_loaded: bool,
}

/// Get the XDG config directory for canvus.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "canvus").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("canvus.toml"))
}

/// Expand `~` and `$VAR` in a user-supplied path.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(true))
        .build()
        .and_then(|c| c.try_deserialize::<RawSettings>())
        .map_err(|e| config_err(path, e))
}

/// Parse a boolean flag value (`1/true/yes/on`, `0/false/no/off`).
fn parse_bool(name: &str, value: &str) -> ApplicationResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ApplicationError::Config {
            message: format!("{name}: expected a boolean, got '{other}'"),
        }),
    }
}

impl Settings {
    /// Overlay file settings; empty strings count as unset.
    fn merge_with(&self, overlay: RawSettings) -> Self {
        Self {
            url: overlay
                .url
                .filter(|u| !u.is_empty())
                .or_else(|| self.url.clone()),
            api_key: overlay
                .api_key
                .filter(|k| !k.is_empty())
                .or_else(|| self.api_key.clone()),
            strict: overlay.strict.unwrap_or(self.strict),
            config_file: self.config_file.clone(),
            config_loaded: self.config_loaded,
        }
    }

    /// Apply `CANVUS_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut self) -> ApplicationResult<Self> {
        if let Some(url) = env::lookup(CANVUS_URL) {
            self.url = Some(url);
        }
        if let Some(key) = env::lookup(CANVUS_API_KEY) {
            self.api_key = Some(ApiKey::new(key));
        }
        if let Some(strict) = env::lookup(CANVUS_STRICT) {
            self.strict = parse_bool(CANVUS_STRICT, &strict)?;
        }
        Ok(self)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_path` - Explicit config file; falls back to the XDG location
    ///
    /// A missing config file is not an error. An unreadable or malformed one is.
    pub fn load(config_path: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self {
            config_file: config_path.map(expand_path).or_else(global_config_path),
            ..Self::default()
        };

        // 2. Config file
        if let Some(path) = current.config_file.clone() {
            if path.exists() {
                debug!("load: reading {}", path.display());
                let raw = load_raw_settings(&path)?;
                current = current.merge_with(raw);
                current.config_loaded = true;
            } else {
                debug!("load: no config file at {}", path.display());
            }
        }

        // 3. Environment
        let current = current.apply_env_overrides()?;
        debug!("load: {:?}", current);
        Ok(current)
    }
}

/// Describe a config failure without quoting file content.
///
/// Parser and serde messages echo source lines and values, which may hold
/// the API key, so only the location and key names are kept.
fn config_err(path: &Path, e: ConfigError) -> ApplicationError {
    let detail = match &e {
        ConfigError::FileParse { cause, .. } => cause
            .to_string()
            .lines()
            .next()
            .filter(|line| line.starts_with("TOML parse error at line"))
            .map(|line| line.trim_start_matches("TOML ").to_string())
            .unwrap_or_else(|| "parse error".to_string()),
        ConfigError::Type {
            key: Some(key),
            expected,
            ..
        } => format!("{key}: expected {expected}"),
        ConfigError::Type { expected, .. } => format!("expected {expected}"),
        ConfigError::NotFound(key) => format!("missing {key}"),
        _ => "invalid settings".to_string(),
    };
    ApplicationError::Config {
        message: format!("{}: {}", path.display(), detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_boolean_spellings_when_parsing_then_accepts_common_forms() {
        for value in ["1", "true", "TRUE", "yes", "on", " true "] {
            assert!(parse_bool("X", value).expect(value), "{value}");
        }
        for value in ["0", "false", "No", "off"] {
            assert!(!parse_bool("X", value).expect(value), "{value}");
        }
    }

    #[test]
    fn given_garbage_when_parsing_bool_then_config_error() {
        let err = parse_bool("CANVUS_STRICT", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config error: CANVUS_STRICT: expected a boolean, got 'maybe'"
        );
    }

    #[test]
    fn given_parse_error_quoting_key_when_describing_then_only_location_kept() {
        let cause = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "TOML parse error at line 1, column 11\n  |\n1 | api_key = \"cvs_live_TOPSECRET\n  |           ^\ninvalid basic string\n",
        );
        let err = config_err(
            Path::new("/tmp/canvus.toml"),
            ConfigError::FileParse { uri: None, cause: Box::new(cause) },
        );

        assert_eq!(
            err.to_string(),
            "config error: /tmp/canvus.toml: parse error at line 1, column 11"
        );
    }

    #[test]
    fn given_type_error_with_value_when_describing_then_value_omitted() {
        let err = config_err(
            Path::new("/tmp/canvus.toml"),
            ConfigError::Type {
                origin: None,
                unexpected: ::config::Unexpected::Str("cvs_live_TOPSECRET".into()),
                expected: "a boolean",
                key: Some("strict".into()),
            },
        );

        let message = err.to_string();
        assert!(!message.contains("TOPSECRET"), "{message}");
        assert!(message.ends_with("strict: expected a boolean"), "{message}");
    }

    #[test]
    fn given_overlay_when_merging_then_set_fields_win() {
        let base = Settings {
            url: Some("https://base".into()),
            api_key: Some(ApiKey::new("base-key-123456")),
            ..Settings::default()
        };
        let overlay = RawSettings {
            url: Some("https://file".into()),
            api_key: None,
            strict: Some(true),
        };

        let merged = base.merge_with(overlay);

        assert_eq!(merged.url.as_deref(), Some("https://file"));
        assert_eq!(merged.api_key, Some(ApiKey::new("base-key-123456")));
        assert!(merged.strict);
    }

    #[test]
    fn given_empty_strings_when_merging_then_treated_as_unset() {
        let base = Settings {
            url: Some("https://base".into()),
            ..Settings::default()
        };
        let overlay = RawSettings {
            url: Some(String::new()),
            api_key: Some(ApiKey::new("")),
            strict: None,
        };

        let merged = base.merge_with(overlay);

        assert_eq!(merged.url.as_deref(), Some("https://base"));
        assert_eq!(merged.api_key, None);
        assert!(!merged.strict);
    }

    #[test]
    fn given_tilde_path_when_expanding_then_uses_home() {
        let home = std::env::var("HOME").expect("HOME should be set");
        let expanded = expand_path(Path::new("~/canvus.toml"));
        assert_eq!(expanded, PathBuf::from(home).join("canvus.toml"));
    }

    #[test]
    fn given_settings_with_key_when_debug_formatted_then_key_masked() {
        let settings = Settings {
            api_key: Some(ApiKey::new("0123456789abcdef")),
            ..Settings::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("0123****cdef"));
    }
}
