//! Three-step archive download.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{SearchRequest, TOKEN_FIELD};
use crate::portal::{Endpoints, PortalConfig, PortalSession, extract_hidden_value};

use super::error::FetchError;

/// An archive saved to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedArchive {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Run the token / search / download sequence for one request and save
/// the archive into `out_dir` under [`SearchRequest::archive_filename`].
///
/// Any existing file of that name is overwritten. Nothing is written
/// unless all three steps answer 200, and a missing token stops the
/// sequence before the search is submitted.
pub async fn fetch_archive(
    session: &PortalSession,
    endpoints: &Endpoints,
    request: &SearchRequest,
    out_dir: &Path,
) -> Result<DownloadedArchive, FetchError> {
    info!(station = %request.station, date = %request.date, "opening session");
    let landing = session.get(&endpoints.form).await?;
    if !landing.is_ok() {
        warn!(status = landing.status.as_u16(), "home page unavailable");
        return Err(FetchError::LandingPageUnreachable {
            url: endpoints.form.to_string(),
            status: landing.status.as_u16(),
        });
    }

    let token = extract_hidden_value(&landing.text(), TOKEN_FIELD)
        .ok()
        .filter(|token| !token.is_empty())
        .ok_or(FetchError::TokenMissing)?;

    info!(
        start = request.start_hour,
        end = request.end_hour,
        "submitting search"
    );
    let search = session
        .post_form(&endpoints.form, &request.form_fields(&token))
        .await?;
    if !search.is_ok() {
        warn!(status = search.status.as_u16(), "search rejected");
        return Err(FetchError::SearchSubmissionFailed {
            status: search.status.as_u16(),
        });
    }

    // The download URL has no parameters; the session cookie selects the result set.
    info!("downloading archive");
    let archive = session.get(&endpoints.download).await?;
    if !archive.is_ok() {
        warn!(status = archive.status.as_u16(), "download rejected");
        return Err(FetchError::DownloadFailed {
            status: archive.status.as_u16(),
        });
    }

    let path = out_dir.join(request.archive_filename());
    tokio::fs::write(&path, &archive.body)
        .await
        .map_err(|source| FetchError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), bytes = archive.body.len(), "archive saved");
    Ok(DownloadedArchive {
        path,
        bytes: archive.body.len(),
    })
}

/// Archive fetcher over a session of its own.
///
/// Each fetcher owns one session, so two fetchers never see each other's
/// search results.
#[derive(Debug)]
pub struct RinexFetcher {
    session: PortalSession,
    endpoints: Endpoints,
}

impl RinexFetcher {
    /// Create a fetcher with a fresh session.
    pub fn new(config: &PortalConfig) -> Result<Self, FetchError> {
        Ok(Self {
            session: PortalSession::new(config)?,
            endpoints: config.endpoints()?,
        })
    }

    /// Download the archive for `request` into `out_dir`.
    pub async fn fetch(
        &self,
        request: &SearchRequest,
        out_dir: &Path,
    ) -> Result<DownloadedArchive, FetchError> {
        fetch_archive(&self.session, &self.endpoints, request, out_dir).await
    }
}
