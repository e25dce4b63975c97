//! Status report shown by `canvus info`
//!
//! Collects what the CLI currently knows: the raw environment (resolved and
//! masked), the effective settings, and whether they are enough for a session.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{mask, Session, NOT_SET};
use crate::infrastructure::env::{self, CANVUS_API_KEY, CANVUS_URL};

/// Build an SDK session from settings.
pub fn open_session(settings: &Settings) -> ApplicationResult<Session> {
    Ok(Session::new(settings.url.clone(), settings.api_key.clone())?)
}

/// Whether the settings can form a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Incomplete(String),
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Ready => f.write_str("ready"),
            SessionState::Incomplete(reason) => write!(f, "incomplete ({reason})"),
        }
    }
}

/// Display-safe snapshot of CLI state. Every credential field is masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub session_type: &'static str,
    /// `CANVUS_URL` as found in the environment
    pub env_url: String,
    /// `CANVUS_API_KEY` from the environment, masked
    pub env_api_key: String,
    pub config_file: Option<PathBuf>,
    pub config_loaded: bool,
    /// Why settings could not be loaded; values below are then defaults
    pub config_error: Option<String>,
    /// Effective URL after config file and environment
    pub url: String,
    /// Effective API key, masked
    pub api_key: String,
    pub session: SessionState,
}

impl StatusReport {
    pub fn collect(settings: &Settings) -> Self {
        let session = match open_session(settings) {
            Ok(_) => SessionState::Ready,
            Err(e) => SessionState::Incomplete(e.to_string()),
        };
        debug!("collect: session={}", session);

        Self {
            session_type: Session::type_name(),
            env_url: env::resolve(CANVUS_URL, NOT_SET),
            env_api_key: mask(&env::resolve(CANVUS_API_KEY, "")),
            config_file: settings.config_file.clone(),
            config_loaded: settings.config_loaded,
            config_error: None,
            url: settings.url.clone().unwrap_or_else(|| NOT_SET.to_string()),
            api_key: settings
                .api_key
                .as_ref()
                .map(|k| k.masked())
                .unwrap_or_else(|| NOT_SET.to_string()),
            session,
        }
    }

    pub fn with_config_error(mut self, config_error: Option<String>) -> Self {
        self.config_error = config_error;
        self
    }

    /// Config file line: path plus load state.
    pub fn config_file_display(&self) -> String {
        if let Some(error) = &self.config_error {
            return format!("(not loaded: {error})");
        }
        match (&self.config_file, self.config_loaded) {
            (Some(path), true) => format!("{} (loaded)", path.display()),
            (Some(path), false) => format!("{} (not found)", path.display()),
            (None, _) => "(none)".to_string(),
        }
    }
}
