//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON produced by their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use std::collections::HashMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The holiday provider rejected the request or could not be reached.
    #[schema(rename = "invalid_external_input")]
    InvalidExternalInput,
    /// The holiday provider has nothing for the requested country and year.
    #[schema(rename = "no_data")]
    NoData,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: countryCode")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::HolidaySummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::HolidaySummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HolidaySummarySchema {
    /// Calendar date of the holiday.
    #[schema(format = Date, example = "2025-04-26")]
    date: String,
    /// Standard (English) holiday name.
    #[schema(example = "King's Day")]
    name: Option<String>,
}

/// OpenAPI schema for [`crate::domain::PublicHolidayRanking`].
///
/// Country code to weekday public holiday count, highest count first.
#[derive(ToSchema)]
#[schema(
    as = crate::domain::PublicHolidayRanking,
    example = json!({ "US": 13, "BE": 9, "NL": 7 })
)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PublicHolidayRankingSchema(HashMap<String, u32>);

/// OpenAPI schema for [`crate::domain::CommonHolidays`].
///
/// Shared date to per-country holiday names, dates ascending.
#[derive(ToSchema)]
#[schema(
    as = crate::domain::CommonHolidays,
    example = json!({ "2025-05-29": { "BE": "O.L.H. Hemelvaart", "NL": "Hemelvaartsdag" } })
)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommonHolidaysSchema(HashMap<String, HashMap<String, String>>);
