//! Holiday records and the classifier predicates built on them.
//!
//! A [`HolidayRecord`] is exactly what the provider reported for one
//! observance; aggregation never mutates records and only ever builds new
//! values such as [`HolidaySummary`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::text::eq_ignore_case;

/// Holiday type tag marking an official public holiday.
pub const PUBLIC_HOLIDAY_TYPE: &str = "public";

/// One holiday observance as reported by the holiday provider.
///
/// ## Invariants
/// - `date` is a valid proleptic Gregorian calendar date; payloads with
///   malformed dates are rejected while decoding.
/// - An empty `types` list classifies as "not public".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    /// Calendar date of the observance.
    pub date: NaiveDate,
    /// Name in the country's own language.
    pub local_name: Option<String>,
    /// Standard (English) name.
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code of the observing country.
    pub country_code: Option<String>,
    /// Whether the holiday falls on the same date every year.
    pub fixed: Option<bool>,
    /// Whether the holiday is observed country-wide.
    pub global: Option<bool>,
    /// Subdivision codes when the holiday is regional.
    pub counties: Option<Vec<String>>,
    /// First year the holiday was observed.
    pub launch_year: Option<i32>,
    /// Classification tags such as `Public`, `Bank` or `School`.
    pub types: Vec<String>,
}

impl HolidayRecord {
    /// Record carrying only a date; every optional field is empty.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use holidays_api::domain::HolidayRecord;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 12, 25).expect("valid date");
    /// let record = HolidayRecord {
    ///     name: Some("Christmas Day".to_owned()),
    ///     types: vec!["Public".to_owned()],
    ///     ..HolidayRecord::new(date)
    /// };
    /// assert!(record.is_public_holiday());
    /// assert!(!record.is_weekend());
    /// ```
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            local_name: None,
            name: None,
            country_code: None,
            fixed: None,
            global: None,
            counties: None,
            launch_year: None,
            types: Vec::new(),
        }
    }

    /// True when any type tag equals `public`, ignoring case.
    #[must_use]
    pub fn is_public_holiday(&self) -> bool {
        self.types
            .iter()
            .any(|tag| eq_ignore_case(tag, PUBLIC_HOLIDAY_TYPE))
    }

    /// True when the date falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Name shown to callers: the local name, else the standard name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.local_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Project onto the date and standard name only.
    #[must_use]
    pub fn summarise(&self) -> HolidaySummary {
        HolidaySummary {
            date: self.date,
            name: self.name.clone(),
        }
    }
}

/// Date and name of a past holiday, as returned by the recent-holidays view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaySummary {
    /// Calendar date, serialised as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Standard (English) name; omitted when the provider sent none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
