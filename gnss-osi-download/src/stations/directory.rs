//! Landing page station listing.

use tracing::{info, warn};

use crate::domain::{STATION_FIELD, StationRecord};
use crate::portal::{Endpoints, PortalConfig, PortalSession, extract_options};

use super::error::StationError;

/// Fetch the landing page and read the stations offered by its search form.
///
/// Stations come back in the order the server lists them.
pub async fn list_stations(
    session: &PortalSession,
    endpoints: &Endpoints,
) -> Result<Vec<StationRecord>, StationError> {
    let response = session.get(&endpoints.form).await?;

    if !response.is_ok() {
        warn!(status = response.status.as_u16(), "home page unavailable");
        return Err(StationError::StationListUnreachable {
            url: endpoints.form.to_string(),
            status: response.status.as_u16(),
        });
    }

    let options = extract_options(&response.text(), STATION_FIELD)
        .map_err(|_| StationError::SelectionControlMissing)?;

    let stations: Vec<StationRecord> = options
        .into_iter()
        .map(|(id, label)| StationRecord { id, label })
        .collect();

    info!(count = stations.len(), "read station list");
    Ok(stations)
}

/// Station listing over a session of its own.
#[derive(Debug)]
pub struct StationDirectory {
    session: PortalSession,
    endpoints: Endpoints,
}

impl StationDirectory {
    /// Create a directory reader with a fresh session.
    pub fn new(config: &PortalConfig) -> Result<Self, StationError> {
        Ok(Self {
            session: PortalSession::new(config)?,
            endpoints: config.endpoints()?,
        })
    }

    /// Fetch all stations from the portal.
    pub async fn fetch_all(&self) -> Result<Vec<StationRecord>, StationError> {
        list_stations(&self.session, &self.endpoints).await
    }
}
