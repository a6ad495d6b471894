//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers the holiday and health paths
//! plus the schema wrappers from [`crate::inbound::http::schemas`], which keep
//! domain types free of utoipa derives.
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CommonHolidaysSchema, ErrorCodeSchema, ErrorSchema, HolidaySummarySchema,
    PublicHolidayRankingSchema,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holidays API",
        description = "Aggregated public holiday views built on an external holiday provider."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::holidays::last_three_holidays,
        crate::inbound::http::holidays::public_holidays,
        crate::inbound::http::holidays::common_holidays,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        HolidaySummarySchema,
        PublicHolidayRankingSchema,
        CommonHolidaysSchema
    )),
    tags(
        (name = "holidays", description = "Holiday aggregation queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/country/last3Holidays",
            "/country/publicHolidays",
            "/countries/commonHolidays",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn openapi_registers_holiday_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in [
            "crate.domain.HolidaySummary",
            "crate.domain.PublicHolidayRanking",
            "crate.domain.CommonHolidays",
        ] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
