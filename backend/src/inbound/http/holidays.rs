//! Holiday read endpoints.
//!
//! ```text
//! GET /country/last3Holidays?countryCode=NL
//! GET /country/publicHolidays?year=2025&countryCodes=US,NL,BE
//! GET /countries/commonHolidays?countryCode1=NL&countryCode2=BE&year=2025
//! ```

use actix_web::{HttpRequest, get, web};
use chrono::Datelike;
use serde::Deserialize;
use url::form_urlencoded;

use crate::domain::{CommonHolidays, HolidaySummary, PublicHolidayRanking};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::query_error_handler;
use crate::inbound::http::schemas::{
    CommonHolidaysSchema, ErrorSchema, HolidaySummarySchema, PublicHolidayRankingSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_country_codes, parse_year, require_country_code, require_distinct_countries,
};

const COUNTRY_CODE: FieldName = FieldName::new("countryCode");
const COUNTRY_CODE_1: FieldName = FieldName::new("countryCode1");
const COUNTRY_CODE_2: FieldName = FieldName::new("countryCode2");
const COUNTRY_CODES: FieldName = FieldName::new("countryCodes");
const YEAR: FieldName = FieldName::new("year");

/// Register the holiday endpoints and their query error handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(last_three_holidays)
        .service(public_holidays)
        .service(common_holidays);
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastThreeHolidaysQuery {
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonHolidaysQuery {
    country_code1: Option<String>,
    country_code2: Option<String>,
    year: Option<String>,
}

/// The last three holidays a country observed before today.
#[utoipa::path(
    get,
    path = "/country/last3Holidays",
    description = "Return the three most recent past holidays for a country, most recent first, searching earlier years when the current one has fewer than three.",
    params(
        ("countryCode" = String, Query, description = "ISO 3166-1 alpha-2 country code", example = "NL")
    ),
    responses(
        (status = 200, description = "Three most recent holidays", body = Vec<HolidaySummarySchema>),
        (status = 400, description = "Invalid request or provider rejection", body = ErrorSchema),
        (status = 500, description = "No data for the country", body = ErrorSchema)
    ),
    tags = ["holidays"],
    operation_id = "getLastThreeHolidays"
)]
#[get("/country/last3Holidays")]
pub async fn last_three_holidays(
    state: web::Data<HttpState>,
    query: web::Query<LastThreeHolidaysQuery>,
) -> ApiResult<web::Json<Vec<HolidaySummary>>> {
    let country_code = require_country_code(query.into_inner().country_code, COUNTRY_CODE)?;
    let year = state.clock.local().year();
    let recent = state.holidays.recent_holidays(&country_code, year).await?;
    Ok(web::Json(recent))
}

/// Rank countries by weekday public holidays in a year.
///
/// `countryCodes` may be comma-separated, repeated, or both, so the query
/// string is read directly instead of through `web::Query`.
#[utoipa::path(
    get,
    path = "/country/publicHolidays",
    description = "Count public holidays falling on weekdays for each country and return the counts in descending order.",
    params(
        ("year" = i32, Query, description = "Calendar year", example = 2025),
        ("countryCodes" = Vec<String>, Query, description = "Country codes, comma-separated and/or repeated", example = "US,NL,BE")
    ),
    responses(
        (status = 200, description = "Countries ranked by weekday public holidays", body = PublicHolidayRankingSchema),
        (status = 400, description = "Invalid request or provider rejection", body = ErrorSchema),
        (status = 500, description = "No data for one of the countries", body = ErrorSchema)
    ),
    tags = ["holidays"],
    operation_id = "getPublicHolidayRanking"
)]
#[get("/country/publicHolidays")]
pub async fn public_holidays(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<PublicHolidayRanking>> {
    let mut year = None;
    let mut codes = Vec::new();
    for (key, value) in form_urlencoded::parse(request.query_string().as_bytes()) {
        match key.as_ref() {
            "year" => year = Some(value.into_owned()),
            "countryCodes" => codes.push(value.into_owned()),
            _ => {}
        }
    }

    let year = parse_year(year, YEAR)?;
    let codes = parse_country_codes(codes, COUNTRY_CODES)?;
    let ranking = state.holidays.public_holiday_ranking(&codes, year).await?;
    Ok(web::Json(ranking))
}

/// Dates on which two countries both observe a holiday.
#[utoipa::path(
    get,
    path = "/countries/commonHolidays",
    description = "Return the dates in a year on which both countries observe a holiday, with each country's local holiday names.",
    params(
        ("countryCode1" = String, Query, description = "First country code", example = "NL"),
        ("countryCode2" = String, Query, description = "Second country code, different from the first", example = "BE"),
        ("year" = i32, Query, description = "Calendar year", example = 2025)
    ),
    responses(
        (status = 200, description = "Shared holiday dates", body = CommonHolidaysSchema),
        (status = 400, description = "Invalid request or provider rejection", body = ErrorSchema),
        (status = 500, description = "No data for one of the countries", body = ErrorSchema)
    ),
    tags = ["holidays"],
    operation_id = "getCommonHolidays"
)]
#[get("/countries/commonHolidays")]
pub async fn common_holidays(
    state: web::Data<HttpState>,
    query: web::Query<CommonHolidaysQuery>,
) -> ApiResult<web::Json<CommonHolidays>> {
    let CommonHolidaysQuery {
        country_code1,
        country_code2,
        year,
    } = query.into_inner();
    let first = require_country_code(country_code1, COUNTRY_CODE_1)?;
    let second = require_country_code(country_code2, COUNTRY_CODE_2)?;
    require_distinct_countries(&first, &second, COUNTRY_CODE_2)?;
    let year = parse_year(year, YEAR)?;

    let common = state
        .holidays
        .common_holidays(&first, &second, year)
        .await?;
    Ok(web::Json(common))
}
