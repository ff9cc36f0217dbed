use crate::error::{DashboardError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date from an ISO-8601 style string
///
/// Timestamps are accepted as well; only their calendar date is kept.
///
/// # Examples
/// ```
/// use temps_dashboard::utils::parse_date;
///
/// let date = parse_date("2009-01-01 00:00:00").unwrap();
/// assert_eq!(date.to_string(), "2009-01-01");
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| DashboardError::InvalidDate(value.to_string()))
}
