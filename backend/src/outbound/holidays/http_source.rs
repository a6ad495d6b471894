//! Reqwest-backed holiday source adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into domain holiday records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::{HolidayDto, into_domain_records};
use crate::domain::HolidayRecord;
use crate::domain::ports::{HolidaySource, HolidaySourceError};

const DEFAULT_USER_AGENT: &str = "holidays-api/0.1";

/// Outbound identity sent with every provider request.
pub struct HolidayHttpIdentity {
    /// HTTP user-agent sent to the provider.
    pub user_agent: String,
}

impl Default for HolidayHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Holiday source adapter issuing `GET {base}/{year}/{countryCode}` requests.
pub struct NagerHolidaySource {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl NagerHolidaySource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = NagerHolidaySource::new(base_url, Duration::from_secs(10));
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(base_url, timeout, HolidayHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: HolidayHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            user_agent: identity.user_agent,
        })
    }
}

impl NagerHolidaySource {
    async fn request(
        &self,
        url: Url,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, HolidaySourceError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status == StatusCode::NO_CONTENT {
            return Err(HolidaySourceError::no_data(country_code, year));
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_holidays(body.as_ref(), country_code, year)
    }
}

#[async_trait]
impl HolidaySource for NagerHolidaySource {
    async fn fetch_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, HolidaySourceError> {
        let url = holidays_url(&self.base_url, country_code, year)?;
        debug!(%url, country_code, year, "fetching holidays");

        let result = self.request(url, country_code, year).await;

        match &result {
            Ok(records) => debug!(country_code, year, count = records.len(), "fetched holidays"),
            Err(HolidaySourceError::NoData { .. }) => {
                debug!(country_code, year, "holiday provider has no data");
            }
            Err(error) => warn!(country_code, year, %error, "holiday fetch failed"),
        }
        result
    }
}

fn holidays_url(base: &Url, country_code: &str, year: i32) -> Result<Url, HolidaySourceError> {
    let code = country_code.trim();
    if code.is_empty() {
        return Err(HolidaySourceError::invalid_request(
            "country code must not be blank",
        ));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| {
            HolidaySourceError::invalid_request(format!(
                "holiday API URL {base} cannot take path segments"
            ))
        })?
        .pop_if_empty()
        .push(&year.to_string())
        .push(code);
    Ok(url)
}

fn parse_holidays(
    body: &[u8],
    country_code: &str,
    year: i32,
) -> Result<Vec<HolidayRecord>, HolidaySourceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HolidaySourceError::no_data(country_code, year));
    }

    let decoded: Option<Vec<HolidayDto>> = serde_json::from_slice(body).map_err(|error| {
        HolidaySourceError::decode(format!("invalid holiday JSON payload: {error}"))
    })?;
    let records = into_domain_records(decoded.unwrap_or_default())
        .map_err(HolidaySourceError::decode)?;
    if records.is_empty() {
        return Err(HolidaySourceError::no_data(country_code, year));
    }
    Ok(records)
}

fn map_transport_error(error: reqwest::Error) -> HolidaySourceError {
    if error.is_timeout() {
        HolidaySourceError::timeout(error.to_string())
    } else if error.is_decode() {
        HolidaySourceError::decode(error.to_string())
    } else {
        HolidaySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> HolidaySourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            HolidaySourceError::timeout(message)
        }
        _ if status.is_client_error() => HolidaySourceError::invalid_request(message),
        _ => HolidaySourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the mapping helpers and for whole responses served from a
    //! local socket.

    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn base(raw: &str) -> Url {
        Url::parse(raw).expect("valid base URL")
    }

    #[rstest]
    #[case::plain("https://date.nager.at/api/v3/PublicHolidays")]
    #[case::trailing_slash("https://date.nager.at/api/v3/PublicHolidays/")]
    fn appends_year_then_country_code(#[case] raw: &str) {
        let url = holidays_url(&base(raw), "NL", 2025).expect("url builds");
        assert_eq!(
            url.as_str(),
            "https://date.nager.at/api/v3/PublicHolidays/2025/NL"
        );
    }

    #[test]
    fn escapes_country_codes_as_single_segments() {
        let url = holidays_url(&base("http://localhost:3000/holidays"), "a/b", 2025)
            .expect("url builds");
        assert_eq!(url.as_str(), "http://localhost:3000/holidays/2025/a%2Fb");
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    fn rejects_blank_country_codes(#[case] code: &str) {
        let error = holidays_url(&base("http://localhost/holidays"), code, 2025)
            .expect_err("blank code must fail");
        assert!(matches!(error, HolidaySourceError::InvalidRequest { .. }));
    }

    #[test]
    fn rejects_bases_that_cannot_take_segments() {
        let error = holidays_url(&base("mailto:ops@example.test"), "NL", 2025)
            .expect_err("cannot-be-a-base URL must fail");
        assert!(matches!(error, HolidaySourceError::InvalidRequest { .. }));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::bad_request(StatusCode::BAD_REQUEST, "InvalidRequest")]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, "InvalidRequest")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Transport")]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY, "Transport")]
    fn maps_http_statuses_to_expected_port_errors(
        #[case] status: StatusCode,
        #[case] expected: &str,
    ) {
        let error = map_status_error(status, b"{\"title\":\"provider unavailable\"}");
        match expected {
            "Timeout" => assert!(
                matches!(error, HolidaySourceError::Timeout { .. }),
                "timeout statuses should map to Timeout",
            ),
            "InvalidRequest" => assert!(
                matches!(error, HolidaySourceError::InvalidRequest { .. }),
                "client statuses should map to InvalidRequest",
            ),
            "Transport" => assert!(
                matches!(error, HolidaySourceError::Transport { .. }),
                "server statuses should map to Transport",
            ),
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[test]
    fn status_messages_carry_a_compact_body_preview() {
        let error = map_status_error(StatusCode::BAD_REQUEST, b"  bad\n\n  year  ");
        assert_eq!(
            error,
            HolidaySourceError::invalid_request("status 400: bad year")
        );
    }

    #[test]
    fn long_previews_are_truncated() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn parses_provider_json_into_domain_records() {
        let body = r#"[
            {
                "date": "2025-04-26",
                "localName": "Koningsdag",
                "name": "King's Day",
                "countryCode": "NL",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            },
            { "date": "2025-12-25", "name": "Christmas Day" }
        ]"#;

        let records = parse_holidays(body.as_bytes(), "NL", 2025).expect("JSON should decode");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2025, 4, 26).expect("valid date")
        );
        assert_eq!(records[0].local_name.as_deref(), Some("Koningsdag"));
        assert_eq!(records[0].country_code.as_deref(), Some("NL"));
        assert!(records[0].is_public_holiday());
        assert!(records[1].types.is_empty());
        assert_eq!(records[1].local_name, None);
    }

    #[rstest]
    #[case::empty_array("[]")]
    #[case::null("null")]
    #[case::empty_body("")]
    #[case::whitespace("  \n")]
    fn treats_empty_answers_as_no_data(#[case] body: &str) {
        let error = parse_holidays(body.as_bytes(), "SS", 2025).expect_err("no data");
        assert_eq!(error, HolidaySourceError::no_data("SS", 2025));
    }

    #[rstest]
    #[case::malformed_date(r#"[{ "date": "2025-02-30", "name": "Nope" }]"#)]
    #[case::not_an_array(r#"{ "date": "2025-01-01" }"#)]
    #[case::missing_date(r#"[{ "name": "Undated" }]"#)]
    #[case::truncated(r#"[{ "date": "2025-01-01""#)]
    fn rejects_undecodable_payloads(#[case] body: &str) {
        let error = parse_holidays(body.as_bytes(), "NL", 2025).expect_err("decode should fail");
        assert!(
            matches!(error, HolidaySourceError::Decode { .. }),
            "bad payloads should map to Decode errors",
        );
    }

    /// Serve one canned HTTP response on a loopback port.
    fn serve_once(status_line: &str, content_type: &str, body: &str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0_u8; 4096];
                if stream.read(&mut request).is_ok() {
                    stream.write_all(response.as_bytes()).ok();
                }
            }
        });
        base(&format!("http://{addr}/api/v3/PublicHolidays"))
    }

    fn source(base_url: Url) -> NagerHolidaySource {
        NagerHolidaySource::new(base_url, Duration::from_secs(5)).expect("client builds")
    }

    #[tokio::test]
    async fn unknown_country_answered_with_not_found_is_a_rejected_request() {
        let base_url = serve_once(
            "404 Not Found",
            "application/problem+json",
            r#"{"type":"about:blank","title":"Not Found","status":404}"#,
        );

        let error = source(base_url)
            .fetch_holidays("XX", 2025)
            .await
            .expect_err("404 must fail");

        assert!(
            matches!(error, HolidaySourceError::InvalidRequest { .. }),
            "404 should map to InvalidRequest, got {error:?}",
        );
    }

    #[rstest]
    #[case::no_content("204 No Content", "")]
    #[case::empty_array("200 OK", "[]")]
    #[tokio::test]
    async fn empty_responses_report_no_data(#[case] status_line: &str, #[case] body: &str) {
        let base_url = serve_once(status_line, "application/json", body);

        let error = source(base_url)
            .fetch_holidays("SS", 2025)
            .await
            .expect_err("empty answer must fail");

        assert_eq!(error, HolidaySourceError::no_data("SS", 2025));
    }

    #[tokio::test]
    async fn successful_responses_decode_into_records() {
        let base_url = serve_once(
            "200 OK",
            "application/json",
            r#"[{"date":"2025-12-25","localName":"Eerste Kerstdag","name":"Christmas Day","countryCode":"NL","types":["Public"]}]"#,
        );

        let records = source(base_url)
            .fetch_holidays("NL", 2025)
            .await
            .expect("records");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name(), "Eerste Kerstdag");
    }
}
