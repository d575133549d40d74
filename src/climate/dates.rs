//! Date grammar and filtering windows.
//!
//! Dates arrive in URL path segments as `mmddyyyy` and are stored in the
//! database as ISO `YYYY-MM-DD` text, so every comparison is done on
//! [`NaiveDate`] values and bound as ISO strings by sqlx.

use chrono::{Days, NaiveDate};

use crate::error::{ApiError, DateBound};

/// Last day covered by the Hawaii dataset.
pub const DEFAULT_REFERENCE_DATE: &str = "2017-08-23";

/// Length of the trailing window served by the precipitation and tobs routes.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Textual format of dates in URL path segments.
pub const PATH_DATE_FORMAT: &str = "%m%d%Y";

/// Default reference date as a [`NaiveDate`].
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 8, 23).expect("2017-08-23 is a valid date")
}

/// Earliest date included in the trailing window ending at `reference`.
pub fn one_year_cutoff(reference: NaiveDate, lookback_days: u32) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse a `mmddyyyy` path segment.
///
/// Chrono accepts single-digit months and days, so the fixed width is checked
/// first: exactly eight ASCII digits, then a real calendar date.
pub fn parse_date(bound: DateBound, raw: &str) -> Result<NaiveDate, ApiError> {
    let invalid = || ApiError::InvalidDate {
        bound,
        value: raw.to_string(),
    };

    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, PATH_DATE_FORMAT).map_err(|_| invalid())
}

/// Inclusive date filter for the temperature statistics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Rows on or after this date
    pub start: NaiveDate,

    /// Rows on or before this date; `None` runs to the end of the data
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range from `start` to the end of the data.
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Range from `start` through `end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parse the raw path segments, validating `start` before `end`.
    pub fn from_path(start: &str, end: Option<&str>) -> Result<Self, ApiError> {
        let start = parse_date(DateBound::Start, start)?;
        match end {
            Some(end) => Ok(Self::between(start, parse_date(DateBound::End, end)?)),
            None => Ok(Self::starting(start)),
        }
    }

    /// Whether no date can satisfy the filter.
    pub fn is_empty(&self) -> bool {
        matches!(self.end, Some(end) if end < self.start)
    }
}
