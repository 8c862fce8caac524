//! Time and calendar-date helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp used for invalidation notices.
pub type Timestamp = DateTime<Utc>;

/// Wire format of stay dates (`checkIn`, `checkOut`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns the chrono parse error when `raw` is not a valid calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
}
