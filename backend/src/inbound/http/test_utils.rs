//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use crate::domain::HolidayAggregationService;
use crate::domain::ports::FixtureHolidaySource;
use crate::inbound::http::state::HttpState;
use crate::test_support::FixedDateClock;

/// Clock handle pinned to `today`.
pub fn fixed_clock(today: NaiveDate) -> Arc<dyn Clock> {
    Arc::new(FixedDateClock::new(today))
}

/// HTTP state backed by `source` with "today" pinned to `today`.
pub fn fixture_state(source: FixtureHolidaySource, today: NaiveDate) -> HttpState {
    let clock = fixed_clock(today);
    let service = HolidayAggregationService::new(Arc::new(source), Arc::clone(&clock));
    HttpState::new(Arc::new(service), clock)
}
