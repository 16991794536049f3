//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DomainError, SearchRequest, StationId, parse_hour, resolve_end_hour};
use crate::portal::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, PortalConfig};
use crate::rinex::FetchError;
use crate::stations::StationError;

/// Download GNSS RINEX files from https://gnss.osi.ie. Please agree to T&C on site first.
#[derive(Debug, Parser)]
#[command(
    name = "gnss-osi-download",
    version,
    after_help = "Project website: https://github.com/jdesbonnet/GNSS_OSI_download"
)]
pub struct Cli {
    /// Obtain a list of station IDs and exit
    #[arg(long)]
    pub list_stations: bool,

    /// Station ID (e.g. glw1 for Galway). Use --list-stations for the full list
    #[arg(long, required_unless_present = "list_stations")]
    pub station_id: Option<String>,

    /// Date of data capture yyyy-mm-dd (sent to the portal as given)
    #[arg(long, required_unless_present = "list_stations")]
    pub date: Option<String>,

    /// Start hour (UTC) 0 to 22
    #[arg(long, default_value = "0")]
    pub start_hour: String,

    /// End hour (UTC) 1 to 24 [default: 24; an empty value means start hour + 1]
    #[arg(long)]
    pub end_hour: Option<String>,

    /// User-Agent header to use in transaction
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Portal base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the archive is saved into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Request timeout in seconds (no timeout if omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the station list as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging of every HTTP exchange
    #[arg(long, short)]
    pub verbose: bool,
}

/// What one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListStations,
    Download(SearchRequest),
}

impl Cli {
    /// Portal settings from the flags.
    pub fn portal_config(&self) -> PortalConfig {
        let config = PortalConfig::new()
            .with_base_url(&self.base_url)
            .with_user_agent(&self.user_agent);
        match self.timeout {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }

    /// Decide and validate what to do.
    ///
    /// Listing stations wins over any download flags.
    pub fn action(&self) -> Result<Action, DomainError> {
        if self.list_stations {
            return Ok(Action::ListStations);
        }

        let station = StationId::parse(self.station_id.as_deref().unwrap_or_default())?;
        let date = self.date.clone().unwrap_or_default();
        let start = parse_hour(&self.start_hour)?;
        let end = resolve_end_hour(start, self.end_hour.as_deref())?;

        Ok(Action::Download(SearchRequest::new(station, date, start, end)))
    }
}

/// Any failure of a run, as reported to the user.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to encode station list: {0}")]
    Json(#[from] serde_json::Error),
}
