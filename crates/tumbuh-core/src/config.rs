//! Site Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Front-end settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the account/content API; `None` selects the simulation
    #[serde(default)]
    pub api_base: Option<String>,

    /// How long the loading overlay stays after a navigation
    #[serde(default = "default_page_load_delay_ms")]
    pub page_load_delay_ms: u64,

    /// Latency of simulated account/content API calls
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Toasts visible at once
    #[serde(default = "default_toast_limit")]
    pub toast_limit: usize,

    /// Auto-dismiss delay for toasts
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Local-storage key holding the theme
    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,
}

fn default_page_load_delay_ms() -> u64 { 500 }
fn default_submit_delay_ms() -> u64 { 1500 }
fn default_toast_limit() -> usize { 3 }
fn default_toast_duration_ms() -> u64 { 5000 }
fn default_theme_storage_key() -> String { "tumbuh-ide-theme".into() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            page_load_delay_ms: default_page_load_delay_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            toast_limit: default_toast_limit(),
            toast_duration_ms: default_toast_duration_ms(),
            theme_storage_key: default_theme_storage_key(),
        }
    }
}

impl SiteConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validated()
    }

    /// Set the API base, treating blank values as unset
    ///
    /// The base must be an `http(s)://` URL or a root-relative path.
    pub fn with_api_base(mut self, base: Option<&str>) -> Result<Self> {
        self.api_base = base
            .map(|b| b.trim().trim_end_matches('/'))
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        self.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.toast_limit == 0 {
            return Err(SiteError::Config("toast_limit must be at least 1".into()));
        }
        if let Some(base) = &self.api_base {
            if !(base.starts_with("http://") || base.starts_with("https://") || base.starts_with('/')) {
                return Err(SiteError::Config(format!("api_base is not a URL: {base}")));
            }
        }
        Ok(self)
    }

    pub fn page_load_delay(&self) -> Duration {
        Duration::from_millis(self.page_load_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.page_load_delay(), Duration::from_millis(500));
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.theme_storage_key, "tumbuh-ide-theme");
        assert!(config.api_base.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SiteConfig::from_json(r#"{"api_base": "https://api.tumbuhide.com"}"#).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("https://api.tumbuhide.com"));
        assert_eq!(config.toast_limit, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SiteConfig::from_json(r#"{"toast_limit": 0}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"api_base": "ftp://x"}"#).is_err());
        assert!(SiteConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_with_api_base() {
        let config = SiteConfig::default().with_api_base(Some("https://api.example.com/ ")).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("https://api.example.com"));
        let config = SiteConfig::default().with_api_base(Some("/backend/")).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("/backend"));
        let config = SiteConfig::default().with_api_base(Some("  ")).unwrap();
        assert!(config.api_base.is_none());
        let config = SiteConfig::default().with_api_base(None).unwrap();
        assert!(config.api_base.is_none());
    }

    #[test]
    fn test_with_api_base_rejects_non_urls() {
        for bad in ["ftp://x", "api.example.com"] {
            let err = SiteConfig::default().with_api_base(Some(bad)).unwrap_err();
            assert!(matches!(err, SiteError::Config(_)), "{bad}");
            assert!(err.to_string().contains(bad));
        }
    }
}
