//! Station directory error types.

use crate::portal::PortalError;

/// Errors that can occur when listing stations.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Landing page answered with something other than 200
    #[error("failed to access the home page at {url}: status code {status}")]
    StationListUnreachable { url: String, status: u16 },

    /// Landing page has no `<select name="station0">`
    #[error("station selection control not found on the home page")]
    SelectionControlMissing,

    /// Transport failure
    #[error(transparent)]
    Portal(#[from] PortalError),
}
