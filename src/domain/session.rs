//! SDK session boundary
//!
//! A session pairs the server URL with an API key. Nothing here talks to the
//! server; the type marks where SDK calls will attach.

use super::error::DomainError;
use super::secret::ApiKey;

/// Credentials for one Canvus server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    url: String,
    api_key: ApiKey,
}

impl Session {
    /// Build a session; both parts must be present and non-empty.
    pub fn new(url: Option<String>, api_key: Option<ApiKey>) -> Result<Self, DomainError> {
        let url = url
            .filter(|u| !u.is_empty())
            .ok_or(DomainError::MissingSetting { name: "url" })?;
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(DomainError::MissingSetting { name: "api_key" })?;
        Ok(Self { url, api_key })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Fully qualified type name, shown by the status report.
    pub fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_url_and_key_when_new_then_builds_session() {
        let session = Session::new(
            Some("https://canvus.example.com".into()),
            Some(ApiKey::new("0123456789abcdef")),
        )
        .expect("session");
        assert_eq!(session.url(), "https://canvus.example.com");
        assert_eq!(session.api_key().expose(), "0123456789abcdef");
    }

    #[test]
    fn given_missing_url_when_new_then_reports_url() {
        let err = Session::new(None, Some(ApiKey::new("k"))).unwrap_err();
        assert_eq!(err.to_string(), "url not set");
    }

    #[test]
    fn given_empty_key_when_new_then_reports_key() {
        let err = Session::new(Some("https://x".into()), Some(ApiKey::new(""))).unwrap_err();
        assert_eq!(err.to_string(), "api_key not set");
    }

    #[test]
    fn given_session_when_debug_formatted_then_key_masked() {
        let session = Session::new(
            Some("https://x".into()),
            Some(ApiKey::new("0123456789abcdef")),
        )
        .expect("session");
        assert!(!format!("{session:?}").contains("0123456789abcdef"));
    }

    #[test]
    fn type_name_points_at_session() {
        assert!(Session::type_name().ends_with("::Session"));
    }
}
