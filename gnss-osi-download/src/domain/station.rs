//! Station identifier types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station code as accepted by the portal's search form.
///
/// Codes are short identifiers such as `glw1` (Galway). The portal serves
/// them lowercase, so no case normalisation is applied: whatever the
/// station listing returned is what gets submitted back.
///
/// # Examples
///
/// ```
/// use gnss_osi_download::domain::StationId;
///
/// let glw1 = StationId::parse("glw1").unwrap();
/// assert_eq!(glw1.as_str(), "glw1");
///
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier.
    ///
    /// The only requirement is that the input is non-empty. It is kept
    /// exactly as given (no trimming) and submitted to the portal verbatim.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the portal's station selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRecord {
    /// The option's `value` attribute, verbatim.
    pub id: String,
    /// The option's display text, trimmed.
    pub label: String,
}

impl fmt::Display for StationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("glw1").is_ok());
        assert!(StationId::parse("ARKL").is_ok());
        assert!(StationId::parse("x").is_ok());
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(StationId::parse("GlW1").unwrap().as_str(), "GlW1");
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        assert_eq!(StationId::parse(" glw1").unwrap().as_str(), " glw1");
        assert_eq!(StationId::parse("gl w1").unwrap().as_str(), "gl w1");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("dsk1").unwrap();
        assert_eq!(format!("{}", id), "dsk1");
        assert_eq!(format!("{:?}", id), "StationId(dsk1)");
    }

    #[test]
    fn record_display_matches_listing_line() {
        let record = StationRecord {
            id: "glw1".to_string(),
            label: "Galway".to_string(),
        };
        assert_eq!(record.to_string(), "glw1 Galway");
    }

    #[test]
    fn record_serializes_to_json() {
        let record = StationRecord {
            id: "glw1".to_string(),
            label: "Galway".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"glw1","label":"Galway"}"#);
    }
}
