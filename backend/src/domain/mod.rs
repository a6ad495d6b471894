//! Domain primitives, read views and the holiday aggregation service.
//!
//! Purpose: define the holiday types the HTTP adapter serialises and the
//! service that derives them from the provider port. Types are immutable
//! once built; serialisation contracts live in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - HolidayRecord and HolidaySummary: provider records and their
//!   projection.
//! - PublicHolidayRanking and CommonHolidays: aggregated views.
//! - HolidayAggregationService: implementation of `ports::HolidayQuery`.

pub mod error;
pub mod holiday;
pub mod holiday_aggregation;
pub mod holiday_views;
pub mod ports;
pub mod text;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::holiday::{HolidayRecord, HolidaySummary, PUBLIC_HOLIDAY_TYPE};
pub use self::holiday_aggregation::{HolidayAggregationService, RECENT_HOLIDAY_COUNT};
pub use self::holiday_views::{CommonHolidays, PublicHolidayRanking};
pub use self::trace_id::TraceId;
