//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Immutable point in time, always stored as UTC.
///
/// Reporting-timezone concerns (the date keyboard anchor, the row timestamp)
/// are projections of this value, never separate clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar date of this instant in the given timezone.
    pub fn date_in(&self, tz: Tz) -> NaiveDate {
        self.0.with_timezone(&tz).date_naive()
    }

    /// Formats this instant as `YYYY-MM-DD HH:MM:SS` wall-clock time in the
    /// given timezone, the layout used for the appended report row.
    pub fn format_in(&self, tz: Tz) -> String {
        self.0
            .with_timezone(&tz)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        // 2025-06-30 23:30:00 UTC
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 6, 30, 23, 30, 0).unwrap())
    }

    #[test]
    fn date_in_utc_matches_utc_date() {
        assert_eq!(
            fixed().date_in(chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
    }

    #[test]
    fn date_in_eastern_timezone_rolls_past_midnight() {
        // 23:30 UTC is already July 1st in Kyiv (UTC+3 in summer).
        assert_eq!(
            fixed().date_in(chrono_tz::Europe::Kiev),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
    }

    #[test]
    fn format_in_renders_wall_clock_time() {
        assert_eq!(fixed().format_in(chrono_tz::UTC), "2025-06-30 23:30:00");
        assert_eq!(
            fixed().format_in(chrono_tz::Europe::Kiev),
            "2025-07-01 02:30:00"
        );
    }

    #[test]
    fn ordering_follows_the_underlying_instant() {
        let earlier = fixed();
        let later = Timestamp::from_datetime(*earlier.as_datetime() + chrono::Duration::hours(1));
        assert!(earlier < later);
    }
}
