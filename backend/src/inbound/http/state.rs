//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::HolidayQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub holidays: Arc<dyn HolidayQuery>,
    /// Source of "now" for endpoints defaulting to the current year.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the holiday use-case port and a clock.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use holidays_api::domain::HolidayAggregationService;
    /// use holidays_api::domain::ports::FixtureHolidaySource;
    /// use holidays_api::inbound::http::state::HttpState;
    /// use mockable::DefaultClock;
    ///
    /// let service = HolidayAggregationService::new(
    ///     Arc::new(FixtureHolidaySource::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _state = HttpState::new(Arc::new(service), Arc::new(DefaultClock));
    /// ```
    pub fn new(holidays: Arc<dyn HolidayQuery>, clock: Arc<dyn Clock>) -> Self {
        Self { holidays, clock }
    }
}
