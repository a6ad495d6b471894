//! Driven port for fetching a country's holidays for one year.
//!
//! Adapters classify every failure before it reaches the domain: "the
//! provider has nothing for this country and year" is [`HolidaySourceError::NoData`],
//! everything else describes why the provider could not answer.

use std::collections::HashMap;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::HolidayRecord;

define_port_error! {
    /// Errors surfaced while fetching holidays from the provider.
    pub enum HolidaySourceError {
        /// The provider returned no records for the country and year.
        NoData { country_code: String, year: i32 } =>
            "no holiday data for {country_code} in {year}",
        /// The provider, or the adapter before sending, rejected the request.
        InvalidRequest { message: String } =>
            "holiday provider rejected request: {message}",
        /// The provider did not answer within the configured timeout.
        Timeout { message: String } =>
            "holiday provider timed out: {message}",
        /// Connection failure or provider-side error status.
        Transport { message: String } =>
            "holiday provider transport failed: {message}",
        /// The response body could not be decoded into holiday records.
        Decode { message: String } =>
            "holiday provider response decode failed: {message}",
    }
}

/// Port for fetching holiday records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch every holiday `country_code` observes in `year`.
    ///
    /// Never returns an empty list: an empty provider answer is
    /// [`HolidaySourceError::NoData`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use holidays_api::domain::ports::{FixtureHolidaySource, HolidaySource, HolidaySourceError};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let source = FixtureHolidaySource::default();
    /// let err = source.fetch_holidays("SS", 2025).await.unwrap_err();
    /// assert!(matches!(err, HolidaySourceError::NoData { .. }));
    /// # });
    /// ```
    async fn fetch_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, HolidaySourceError>;
}

/// In-memory source keyed by country code and year.
///
/// Lookups ignore the case of the country code. Missing or empty entries
/// answer with [`HolidaySourceError::NoData`], matching the HTTP adapter.
#[derive(Debug, Clone, Default)]
pub struct FixtureHolidaySource {
    holidays: HashMap<(String, i32), Vec<HolidayRecord>>,
}

impl FixtureHolidaySource {
    /// Register `records` for `country_code` in `year`, replacing any entry.
    #[must_use]
    pub fn with_holidays(
        mut self,
        country_code: &str,
        year: i32,
        records: Vec<HolidayRecord>,
    ) -> Self {
        self.holidays
            .insert((country_code.to_ascii_uppercase(), year), records);
        self
    }
}

#[async_trait]
impl HolidaySource for FixtureHolidaySource {
    async fn fetch_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, HolidaySourceError> {
        match self
            .holidays
            .get(&(country_code.to_ascii_uppercase(), year))
        {
            Some(records) if !records.is_empty() => Ok(records.clone()),
            _ => Err(HolidaySourceError::no_data(country_code, year)),
        }
    }
}
