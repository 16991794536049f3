//! GNSS RINEX downloader for the OSI GNSS portal (https://gnss.osi.ie).
//!
//! The portal has no API, so this crate drives it the way a browser
//! does: one cookie-carrying session, a hidden form token scraped from
//! the landing page, a search form POST, and a download GET whose result
//! is chosen by the session cookie.

pub mod cli;
pub mod domain;
pub mod portal;
pub mod rinex;
pub mod stations;
