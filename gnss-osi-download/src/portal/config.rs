//! Portal connection settings.

use reqwest::Url;

use super::error::PortalError;

/// Default base URL of the OSI GNSS download portal.
pub const DEFAULT_BASE_URL: &str = "https://gnss.osi.ie";

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = "GNSS_OSI_download v1.0";

/// Configuration for a portal session.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the portal (no trailing path)
    pub base_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Request timeout in seconds; `None` leaves the client default (no timeout)
    pub timeout_secs: Option<u64>,
}

impl PortalConfig {
    /// Create a config pointing at the public portal.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (mirror or test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Resolve the form and download endpoints from the base URL.
    pub fn endpoints(&self) -> Result<Endpoints, PortalError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Endpoints {
            form: parse_url(&format!("{base}/"))?,
            download: parse_url(&format!("{base}/?download"))?,
        })
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The two URLs the portal workflow talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Landing page; GET serves the form, POST submits a search.
    pub form: Url,
    /// Download trigger; returns the archive for the session's last search.
    pub download: Url,
}

fn parse_url(url: &str) -> Result<Url, PortalError> {
    Url::parse(url).map_err(|e| PortalError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
