//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod holiday_query;
mod holiday_source;

#[cfg(test)]
pub use holiday_query::MockHolidayQuery;
pub use holiday_query::HolidayQuery;
#[cfg(test)]
pub use holiday_source::MockHolidaySource;
pub use holiday_source::{FixtureHolidaySource, HolidaySource, HolidaySourceError};
