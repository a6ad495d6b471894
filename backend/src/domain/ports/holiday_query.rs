//! Driving port exposing the holiday aggregation use-cases to adapters.

use async_trait::async_trait;

use crate::domain::{CommonHolidays, Error, HolidaySummary, PublicHolidayRanking};

/// Read-side holiday use-cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidayQuery: Send + Sync {
    /// The three most recent holidays before today, most recent first,
    /// starting the search in `year` and stepping back a year at a time.
    async fn recent_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidaySummary>, Error>;

    /// Countries ranked by their count of weekday public holidays in `year`.
    async fn public_holiday_ranking(
        &self,
        country_codes: &[String],
        year: i32,
    ) -> Result<PublicHolidayRanking, Error>;

    /// Dates in `year` on which both countries observe a holiday.
    async fn common_holidays(
        &self,
        first_country: &str,
        second_country: &str,
        year: i32,
    ) -> Result<CommonHolidays, Error>;
}
