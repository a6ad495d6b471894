//! End-to-end coverage of the holiday endpoints through the public API.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::NaiveDate;
use holidays_api::Trace;
use holidays_api::domain::ports::FixtureHolidaySource;
use holidays_api::domain::{HolidayAggregationService, HolidayRecord};
use holidays_api::inbound::http::health::{HealthState, live, ready};
use holidays_api::inbound::http::holidays;
use holidays_api::inbound::http::state::HttpState;
use holidays_api::test_support::FixedDateClock;
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn holiday(on: NaiveDate, code: &str, local_name: &str, name: &str, types: &[&str]) -> HolidayRecord {
    HolidayRecord {
        local_name: Some(local_name.to_owned()),
        name: Some(name.to_owned()),
        country_code: Some(code.to_owned()),
        types: types.iter().map(|tag| (*tag).to_owned()).collect(),
        ..HolidayRecord::new(on)
    }
}

#[fixture]
fn source() -> FixtureHolidaySource {
    FixtureHolidaySource::default()
        .with_holidays(
            "DE",
            2026,
            vec![holiday(date(2026, 1, 1), "DE", "Neujahr", "New Year's Day", &["Public"])],
        )
        .with_holidays(
            "DE",
            2025,
            vec![
                holiday(date(2025, 10, 3), "DE", "Tag der Deutschen Einheit", "German Unity Day", &["Public"]),
                holiday(date(2025, 12, 25), "DE", "Erster Weihnachtstag", "Christmas Day", &["Public"]),
                holiday(date(2025, 12, 26), "DE", "Zweiter Weihnachtstag", "St. Stephen's Day", &["Public"]),
            ],
        )
        .with_holidays(
            "AT",
            2025,
            vec![
                holiday(date(2025, 10, 26), "AT", "Nationalfeiertag", "National Day", &["Public"]),
                holiday(date(2025, 12, 8), "AT", "Mariä Empfängnis", "Immaculate Conception", &["Public"]),
                holiday(date(2025, 12, 25), "AT", "Christtag", "Christmas Day", &["Public"]),
                holiday(date(2025, 12, 26), "AT", "Stefanitag", "St. Stephen's Day", &["Public"]),
                holiday(date(2025, 12, 24), "AT", "Heiliger Abend", "Christmas Eve", &["Bank"]),
            ],
        )
}

async fn get(source: FixtureHolidaySource, uri: &str) -> (StatusCode, Value) {
    let clock: Arc<dyn Clock> = Arc::new(FixedDateClock::new(date(2026, 2, 1)));
    let service = HolidayAggregationService::new(Arc::new(source), Arc::clone(&clock))
        .with_max_lookback_years(Some(1));
    let health = HealthState::new();
    health.mark_ready();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(Arc::new(service), clock)))
            .app_data(web::Data::new(health))
            .wrap(Trace)
            .configure(holidays::configure)
            .service(ready)
            .service(live),
    )
    .await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert!(res.headers().contains_key("trace-id"), "trace-id header missing");
    let status = res.status();
    let body = if status.is_success() && uri.starts_with("/health") {
        Value::Null
    } else {
        test::read_body_json(res).await
    };
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn last_three_holidays_crosses_into_the_previous_year(source: FixtureHolidaySource) {
    let (status, body) = get(source, "/country/last3Holidays?countryCode=DE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "date": "2026-01-01", "name": "New Year's Day" },
            { "date": "2025-12-26", "name": "St. Stephen's Day" },
            { "date": "2025-12-25", "name": "Christmas Day" },
        ])
    );
}

#[rstest]
#[actix_web::test]
async fn last_three_holidays_fails_once_the_lookback_is_exhausted(source: FixtureHolidaySource) {
    let source = source.with_holidays(
        "LI",
        2026,
        vec![holiday(date(2026, 1, 1), "LI", "Neujahr", "New Year's Day", &["Public"])],
    );
    let source = source.with_holidays(
        "LI",
        2025,
        vec![holiday(date(2025, 12, 25), "LI", "Weihnachten", "Christmas Day", &["Public"])],
    );

    let (status, body) = get(source, "/country/last3Holidays?countryCode=LI").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "no_data");
    assert_eq!(body["details"]["earliestYear"], 2025);
}

#[rstest]
#[actix_web::test]
async fn public_holiday_ranking_orders_by_weekday_count(source: FixtureHolidaySource) {
    // 2025-10-26 is a Sunday; Christmas Eve is a bank holiday only.
    let (status, body) = get(source, "/country/publicHolidays?year=2025&countryCodes=DE,AT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "DE": 3, "AT": 3 }));
}

#[rstest]
#[actix_web::test]
async fn common_holidays_lists_shared_dates(source: FixtureHolidaySource) {
    let (status, body) = get(
        source,
        "/countries/commonHolidays?countryCode1=DE&countryCode2=AT&year=2025",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "2025-12-25": { "AT": "Christtag", "DE": "Erster Weihnachtstag" },
            "2025-12-26": { "AT": "Stefanitag", "DE": "Zweiter Weihnachtstag" },
        })
    );
}

#[rstest]
#[actix_web::test]
async fn countries_without_published_holidays_report_no_data(source: FixtureHolidaySource) {
    let (status, body) = get(
        source,
        "/countries/commonHolidays?countryCode1=DE&countryCode2=XX&year=2025",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "no_data");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn health_probes_respond(source: FixtureHolidaySource) {
    let (ready_status, _) = get(source.clone(), "/health/ready").await;
    let (live_status, _) = get(source, "/health/live").await;

    assert_eq!(ready_status, StatusCode::OK);
    assert_eq!(live_status, StatusCode::OK);
}
