//! Domain types for the RINEX downloader.
//!
//! Station identifiers, station listing entries and the search request
//! submitted to the portal. Everything here is plain data with no I/O.

mod error;
mod request;
mod station;

pub use error::DomainError;
pub use request::{
    DEFAULT_END_HOUR, STATION_FIELD, SUBMIT_MARKER, SearchRequest, TOKEN_FIELD, parse_hour,
    resolve_end_hour,
};
pub use station::{InvalidStationId, StationId, StationRecord};
