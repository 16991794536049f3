//! Portal transport error types.

/// Errors from the portal HTTP session itself.
///
/// Non-200 statuses are not errors at this layer; they come back in the
/// response and each workflow step decides what they mean.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// HTTP request failed (connection refused, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// User-Agent value cannot be sent as a header
    #[error("invalid user agent {0:?}")]
    InvalidUserAgent(String),

    /// Base URL does not produce a valid endpoint
    #[error("invalid portal URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors from the HTML field extractor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No element matched
    #[error("{element} not found in page")]
    NotFound { element: String },
}

impl ExtractError {
    pub(crate) fn not_found(element: impl Into<String>) -> Self {
        ExtractError::NotFound {
            element: element.into(),
        }
    }
}
