//! RINEX archive fetcher.
//!
//! Replays the portal's browser workflow on one session:
//!
//! 1. GET the landing page and read the `as_sfid` hidden token
//! 2. POST the search form (station, date, hours, token)
//! 3. GET `/?download` and save the body as a zip
//!
//! Step 3 carries no search parameters at all. The server picks the
//! result set from the session cookies established by step 2, so all
//! three requests must go through the same [`PortalSession`].
//!
//! [`PortalSession`]: crate::portal::PortalSession

mod error;
mod fetcher;

pub use error::FetchError;
pub use fetcher::{DownloadedArchive, RinexFetcher, fetch_archive};
