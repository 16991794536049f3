//! Station directory reader.
//!
//! The portal publishes its station list only as the options of the
//! `station0` select on its landing page.

mod directory;
mod error;

pub use directory::{StationDirectory, list_stations};
pub use error::StationError;
