//! Search parameters for one archive download.

use super::error::DomainError;
use super::station::StationId;

/// End hour used when the caller does not give one.
pub const DEFAULT_END_HOUR: i64 = 24;

/// Value of the `submitSearchByStation` form field.
pub const SUBMIT_MARKER: &str = "FIND DATA";

/// Form field carrying the station id (also the name of the station select).
pub const STATION_FIELD: &str = "station0";

/// Hidden form field carrying the session-binding token.
pub const TOKEN_FIELD: &str = "as_sfid";

/// One station/date/hour-range search.
///
/// Everything is handed to the portal as given: the date is the caller's
/// text (normally `yyyy-mm-dd`), and `start_hour < end_hour` is expected
/// but not checked. The server decides what to do with odd input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub station: StationId,
    pub date: String,
    pub start_hour: i64,
    pub end_hour: i64,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        station: StationId,
        date: impl Into<String>,
        start_hour: i64,
        end_hour: i64,
    ) -> Self {
        Self {
            station,
            date: date.into(),
            start_hour,
            end_hour,
        }
    }

    /// File name the downloaded archive is saved under.
    ///
    /// ```
    /// use gnss_osi_download::domain::{SearchRequest, StationId};
    ///
    /// let request = SearchRequest::new(StationId::parse("glw1").unwrap(), "2024-11-01", 0, 24);
    /// assert_eq!(request.archive_filename(), "RINEX_glw1_2024-11-01_00_24.zip");
    /// ```
    pub fn archive_filename(&self) -> String {
        format!(
            "RINEX_{}_{}_{:02}_{:02}.zip",
            self.station, self.date, self.start_hour, self.end_hour
        )
    }

    /// Fields of the search form POST, in submission order.
    pub fn form_fields(&self, token: &str) -> Vec<(&'static str, String)> {
        vec![
            (STATION_FIELD, self.station.to_string()),
            ("date", self.date.clone()),
            ("start", self.start_hour.to_string()),
            ("end", self.end_hour.to_string()),
            ("submitSearchByStation", SUBMIT_MARKER.to_string()),
            (TOKEN_FIELD, token.to_string()),
        ]
    }
}

/// Parse an hour given on the command line.
///
/// Only integer parsing is applied (sign and surrounding whitespace
/// allowed); the range is not checked.
pub fn parse_hour(s: &str) -> Result<i64, DomainError> {
    s.trim()
        .parse()
        .map_err(|_| DomainError::InvalidHour(s.to_string()))
}

/// Work out the end hour from the raw `--end-hour` value.
///
/// - absent: [`DEFAULT_END_HOUR`]
/// - present but empty: one hour after `start`
/// - otherwise: the parsed integer
pub fn resolve_end_hour(start: i64, raw: Option<&str>) -> Result<i64, DomainError> {
    match raw {
        None => Ok(DEFAULT_END_HOUR),
        Some("") => Ok(start.saturating_add(1)),
        Some(s) => parse_hour(s),
    }
}
