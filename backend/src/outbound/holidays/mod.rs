//! Holiday provider outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `HolidaySource`
//! port against a Nager.Date compatible API.

mod dto;
mod http_source;

pub use http_source::{HolidayHttpIdentity, NagerHolidaySource};
