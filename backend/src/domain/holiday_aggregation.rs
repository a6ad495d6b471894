//! Holiday aggregation service.
//!
//! Builds the three read views on top of the [`HolidaySource`] port:
//! - recent holidays, stepping back one year at a time until three past
//!   holidays are known;
//! - a ranking of countries by weekday public holidays;
//! - the dates two countries share, with each country's holiday names.
//!
//! Fetches are issued one at a time and any source failure aborts the whole
//! call; there are no partial results.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{HolidayQuery, HolidaySource, HolidaySourceError};
use crate::domain::{CommonHolidays, Error, HolidayRecord, HolidaySummary, PublicHolidayRanking};

/// Number of entries returned by the recent-holidays view.
pub const RECENT_HOLIDAY_COUNT: usize = 3;

/// Domain service implementing [`HolidayQuery`].
#[derive(Clone)]
pub struct HolidayAggregationService<S> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    max_lookback_years: Option<u32>,
}

impl<S> HolidayAggregationService<S> {
    /// Create a service with an unbounded recent-holidays lookback.
    pub fn new(source: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            max_lookback_years: None,
        }
    }

    /// Limit how many years before the requested one the lookback may visit.
    ///
    /// `None` keeps searching until the source fails.
    #[must_use]
    pub fn with_max_lookback_years(mut self, max_lookback_years: Option<u32>) -> Self {
        self.max_lookback_years = max_lookback_years;
        self
    }

    /// Candidate years for the lookback, newest first.
    fn lookback_years(&self, year: i32) -> impl Iterator<Item = i32> + use<S> {
        let limit = self
            .max_lookback_years
            .and_then(|max| usize::try_from(max).ok())
            .map_or(usize::MAX, |max| max.saturating_add(1));
        std::iter::successors(Some(year), |previous| previous.checked_sub(1)).take(limit)
    }
}

impl<S> HolidayAggregationService<S>
where
    S: HolidaySource,
{
    async fn fetch(&self, country_code: &str, year: i32) -> Result<Vec<HolidayRecord>, Error> {
        self.source
            .fetch_holidays(country_code, year)
            .await
            .map_err(map_source_error)
    }
}

#[async_trait]
impl<S> HolidayQuery for HolidayAggregationService<S>
where
    S: HolidaySource,
{
    async fn recent_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidaySummary>, Error> {
        let today = self.clock.local().date_naive();
        let mut past: Vec<HolidayRecord> = Vec::new();
        let mut earliest = year;

        for candidate in self.lookback_years(year) {
            earliest = candidate;
            let records = self.fetch(country_code, candidate).await?;
            past.extend(records.into_iter().filter(|record| record.date < today));
            debug!(
                country_code,
                year = candidate,
                collected = past.len(),
                "holiday lookback step"
            );
            if past.len() >= RECENT_HOLIDAY_COUNT {
                break;
            }
        }

        if past.len() < RECENT_HOLIDAY_COUNT {
            return Err(Error::no_data(format!(
                "fewer than {RECENT_HOLIDAY_COUNT} past holidays found for {country_code} between {earliest} and {year}"
            ))
            .with_details(json!({
                "countryCode": country_code,
                "earliestYear": earliest,
                "found": past.len(),
            })));
        }

        past.sort_by(|left, right| right.date.cmp(&left.date));
        Ok(past
            .iter()
            .take(RECENT_HOLIDAY_COUNT)
            .map(HolidayRecord::summarise)
            .collect())
    }

    async fn public_holiday_ranking(
        &self,
        country_codes: &[String],
        year: i32,
    ) -> Result<PublicHolidayRanking, Error> {
        let mut counts: Vec<(String, usize)> = Vec::with_capacity(country_codes.len());
        for country_code in country_codes {
            let weekday_public = self
                .fetch(country_code, year)
                .await?
                .iter()
                .filter(|record| record.is_public_holiday() && !record.is_weekend())
                .count();
            match counts.iter_mut().find(|(seen, _)| seen == country_code) {
                Some(entry) => entry.1 = weekday_public,
                None => counts.push((country_code.clone(), weekday_public)),
            }
        }
        Ok(PublicHolidayRanking::from_counts(counts))
    }

    async fn common_holidays(
        &self,
        first_country: &str,
        second_country: &str,
        year: i32,
    ) -> Result<CommonHolidays, Error> {
        let first = self.fetch(first_country, year).await?;
        let second = self.fetch(second_country, year).await?;

        let mut common = CommonHolidays::default();
        for theirs in &second {
            for ours in first.iter().filter(|ours| ours.date == theirs.date) {
                common.merge(
                    theirs.date,
                    country_key(theirs, second_country),
                    theirs.display_name(),
                );
                common.merge(ours.date, country_key(ours, first_country), ours.display_name());
            }
        }
        Ok(common)
    }
}

/// Country code a record is filed under: its own, else the requested one.
fn country_key<'a>(record: &'a HolidayRecord, requested: &'a str) -> &'a str {
    record
        .country_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
        .unwrap_or(requested)
}

fn map_source_error(error: HolidaySourceError) -> Error {
    match error {
        HolidaySourceError::NoData { country_code, year } => {
            Error::no_data("No data available for input provided").with_details(json!({
                "countryCode": country_code,
                "year": year,
            }))
        }
        HolidaySourceError::InvalidRequest { ref message } => {
            warn!(%message, "holiday provider rejected request");
            Error::invalid_external_input("Invalid input")
        }
        HolidaySourceError::Timeout { ref message } => {
            warn!(%message, "holiday provider timed out");
            Error::invalid_external_input("Holiday provider did not respond in time")
        }
        HolidaySourceError::Transport { ref message } => {
            warn!(%message, "holiday provider transport failure");
            Error::invalid_external_input("Holiday provider is unavailable")
        }
        HolidaySourceError::Decode { ref message } => {
            warn!(%message, "holiday provider response could not be decoded");
            Error::invalid_external_input("Holiday provider returned an unreadable response")
        }
    }
}
