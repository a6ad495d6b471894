//! Test utilities shared by unit tests and the integration suite.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature so the
//! `tests/` crates can reach it.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to local noon on a fixed date.
///
/// # Examples
/// ```
/// use chrono::{Datelike, NaiveDate};
/// use holidays_api::test_support::FixedDateClock;
/// use mockable::Clock;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
/// let clock = FixedDateClock::new(today);
/// assert_eq!(clock.local().date_naive(), today);
/// assert_eq!(clock.local().year(), 2025);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedDateClock {
    today: NaiveDate,
}

impl FixedDateClock {
    /// Pin "today" to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedDateClock {
    fn local(&self) -> DateTime<Local> {
        let noon = self.today.and_hms_opt(12, 0, 0).expect("valid fixture time");
        Local
            .from_local_datetime(&noon)
            .single()
            .expect("unambiguous local noon")
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}
