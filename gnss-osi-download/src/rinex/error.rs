//! RINEX fetch error types.

use std::path::PathBuf;

use crate::portal::PortalError;

/// Errors from the fetch-token / submit-search / download sequence.
///
/// Each status variant names the step that failed. None are retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Step 1: landing page answered with something other than 200
    #[error("failed to access the download home page at {url}: status code {status}")]
    LandingPageUnreachable { url: String, status: u16 },

    /// Step 1: landing page has no usable `as_sfid` hidden field
    #[error("'as_sfid' hidden field not found in the form")]
    TokenMissing,

    /// Step 2: search form POST answered with something other than 200
    #[error("failed to submit the form: status code {status}")]
    SearchSubmissionFailed { status: u16 },

    /// Step 3: download GET answered with something other than 200
    #[error("failed to download data: status code {status}")]
    DownloadFailed { status: u16 },

    /// Transport failure at any step
    #[error(transparent)]
    Portal(#[from] PortalError),

    /// Archive could not be saved
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::LandingPageUnreachable {
            url: "https://gnss.osi.ie/".into(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "failed to access the download home page at https://gnss.osi.ie/: status code 503"
        );

        let err = FetchError::TokenMissing;
        assert_eq!(err.to_string(), "'as_sfid' hidden field not found in the form");

        let err = FetchError::SearchSubmissionFailed { status: 500 };
        assert_eq!(err.to_string(), "failed to submit the form: status code 500");

        let err = FetchError::DownloadFailed { status: 404 };
        assert_eq!(err.to_string(), "failed to download data: status code 404");

        let err = FetchError::Write {
            path: PathBuf::from("out/RINEX.zip"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.to_string(), "failed to write out/RINEX.zip: no such directory");
    }
}
