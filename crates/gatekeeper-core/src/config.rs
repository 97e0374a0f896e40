//! Client configuration: endpoint override and the print/debug switches.

use std::time::Duration;

/// Production scoring endpoint used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://gatekeeper-backend-58h2.onrender.com";

/// Settings passed to the API client at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Overrides [`DEFAULT_API_URL`] when non-empty.
    pub api_url: Option<String>,
    /// Skip the network and return a placeholder verdict.
    pub print_mode: bool,
    /// Send a synthesized placeholder credential instead of the caller's.
    pub debug_mode: bool,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            print_mode: false,
            debug_mode: false,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_print_mode(mut self, enabled: bool) -> Self {
        self.print_mode = enabled;
        self
    }

    pub fn with_debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolve the API base URL, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self.api_url.as_deref() {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert!(!config.print_mode);
        assert!(!config.debug_mode);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn override_trims_trailing_slash() {
        let config = ClientConfig::default().with_api_url("http://localhost:4000/");
        assert_eq!(config.base_url(), "http://localhost:4000");
    }

    #[test]
    fn empty_override_falls_back() {
        let config = ClientConfig::default().with_api_url("");
        assert_eq!(config.base_url(), DEFAULT_API_URL);
    }
}
