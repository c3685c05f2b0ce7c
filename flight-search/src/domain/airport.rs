//! Airport code types.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {code:?}: {reason}")]
pub struct InvalidAirportCode {
    code: String,
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction, and being `Copy`
/// it is cheap to keep in visited sets during search.
///
/// # Examples
///
/// ```
/// use flight_search::domain::AirportCode;
///
/// let lhr = AirportCode::parse("LHR").unwrap();
/// assert_eq!(lhr.as_str(), "LHR");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("lhr").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("LH").is_err());
/// assert!(AirportCode::parse("EGLL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let invalid = |reason| InvalidAirportCode {
            code: s.to_string(),
            reason,
        };
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(invalid("must be exactly 3 characters"));
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(invalid("must be uppercase ASCII letters A-Z"));
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::str::FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
