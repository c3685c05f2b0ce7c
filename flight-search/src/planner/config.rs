//! Search configuration for the flight planner.

use chrono::{Duration, NaiveDate};

use crate::domain::Price;

use super::plan::SearchError;

/// Constraints applied to a flight search.
///
/// Everything except the dates is shared by the outbound and return legs of
/// a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of checked bags the traveller needs.
    pub bags: u32,

    /// Search for a way back as well.
    pub round_trip: bool,

    /// Minimum time between landing and the next take-off (minutes).
    pub min_layover_mins: i64,

    /// Maximum time between landing and the next take-off (minutes).
    pub max_layover_mins: i64,

    /// Upper bound on the whole trip's price, bags included.
    pub max_price: Option<Price>,

    /// Upper bound on connections per leg.
    pub max_connections: Option<usize>,

    /// Earliest date the outbound leg may depart on.
    pub departure_date: Option<NaiveDate>,

    /// Earliest date the return leg may depart on.
    pub return_date: Option<NaiveDate>,
}

impl SearchConfig {
    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Check the options are consistent with each other.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.min_layover_mins < 0 || self.max_layover_mins < 0 {
            return Err(SearchError::InvalidRequest(
                "layover bounds must not be negative".to_string(),
            ));
        }

        if self.min_layover_mins > self.max_layover_mins {
            return Err(SearchError::InvalidRequest(format!(
                "minimum layover ({} min) exceeds maximum layover ({} min)",
                self.min_layover_mins, self.max_layover_mins
            )));
        }

        if let Some(return_date) = self.return_date {
            if !self.round_trip {
                return Err(SearchError::InvalidRequest(
                    "return date given for a one-way search".to_string(),
                ));
            }
            if self.departure_date.is_some_and(|d| return_date < d) {
                return Err(SearchError::InvalidRequest(
                    "return date is before departure date".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bags: 0,
            round_trip: false,
            min_layover_mins: 60,  // 1 hour
            max_layover_mins: 360, // 6 hours
            max_price: None,
            max_connections: None,
            departure_date: None,
            return_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 9, day).unwrap()
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.bags, 0);
        assert!(!config.round_trip);
        assert_eq!(config.min_layover_mins, 60);
        assert_eq!(config.max_layover_mins, 360);
        assert_eq!(config.max_price, None);
        assert_eq!(config.max_connections, None);
        assert_eq!(config.departure_date, None);
        assert_eq!(config.return_date, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_layover(), Duration::hours(1));
        assert_eq!(config.max_layover(), Duration::hours(6));
    }

    #[test]
    fn reject_inverted_layover_bounds() {
        let config = SearchConfig {
            min_layover_mins: 120,
            max_layover_mins: 60,
            ..SearchConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_negative_layover() {
        let config = SearchConfig {
            min_layover_mins: -5,
            ..SearchConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_return_date_on_one_way() {
        let config = SearchConfig {
            return_date: Some(date(10)),
            ..SearchConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid search request: return date given for a one-way search"
        );
    }

    #[test]
    fn reject_return_before_departure() {
        let config = SearchConfig {
            round_trip: true,
            departure_date: Some(date(10)),
            return_date: Some(date(9)),
            ..SearchConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn accept_round_trip_dates() {
        let config = SearchConfig {
            round_trip: true,
            departure_date: Some(date(10)),
            return_date: Some(date(10)),
            ..SearchConfig::default()
        };

        assert!(config.validate().is_ok());
    }
}
