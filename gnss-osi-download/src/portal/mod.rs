//! Browser-style access to the OSI GNSS portal.
//!
//! The portal exposes no API. This module provides the two pieces every
//! workflow needs:
//! - a [`PortalSession`]: one HTTP client with its own cookie jar and a
//!   fixed `User-Agent`, created per operation and never persisted
//! - an HTML extractor that reads hidden form fields and select options
//!   out of served pages, returning `NotFound` instead of failing hard

mod config;
mod error;
mod extract;
mod session;

pub use config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, Endpoints, PortalConfig};
pub use error::{ExtractError, PortalError};
pub use extract::{extract_hidden_value, extract_options};
pub use session::{PortalResponse, PortalSession};
