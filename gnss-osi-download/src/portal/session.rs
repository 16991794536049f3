//! Cookie-carrying HTTP session against the portal.
//!
//! The portal has no API: it is driven like a browser. Cookies set by any
//! response are kept in the session's jar and sent with every later
//! request, which is what ties the search POST to the download GET.

use std::borrow::Cow;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::config::PortalConfig;
use super::error::PortalError;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct PortalResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// The `Cookie` header the session will send to this URL next.
    pub cookies_after: Option<String>,
}

impl PortalResponse {
    /// Only an exact 200 counts as success.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// One browser-like session: a client, its cookie jar and identifying headers.
///
/// Create one per operation and drop it afterwards; nothing is persisted.
#[derive(Debug)]
pub struct PortalSession {
    http: reqwest::Client,
    jar: Arc<Jar>,
}

impl PortalSession {
    /// Create a new session with an empty cookie jar.
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        let mut headers = HeaderMap::new();

        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| PortalError::InvalidUserAgent(config.user_agent.clone()))?;
        headers.insert(USER_AGENT, agent);

        let jar = Arc::new(Jar::default());

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_provider(Arc::clone(&jar));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            jar,
        })
    }

    /// GET a URL.
    pub async fn get(&self, url: &Url) -> Result<PortalResponse, PortalError> {
        let response = self.http.get(url.clone()).send().await?;
        self.read(url, response).await
    }

    /// POST a form-urlencoded body to a URL.
    pub async fn post_form(
        &self,
        url: &Url,
        fields: &[(&str, String)],
    ) -> Result<PortalResponse, PortalError> {
        let response = self.http.post(url.clone()).form(fields).send().await?;
        self.read(url, response).await
    }

    /// The `Cookie` header currently held for a URL.
    pub fn cookies(&self, url: &Url) -> Option<String> {
        self.jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    async fn read(
        &self,
        url: &Url,
        response: reqwest::Response,
    ) -> Result<PortalResponse, PortalError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        let cookies_after = self.cookies(url);

        debug!(
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            ?headers,
            cookies = cookies_after.as_deref().unwrap_or(""),
            "portal response"
        );

        Ok(PortalResponse {
            status,
            headers,
            body,
            cookies_after,
        })
    }
}
