//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;
use crate::domain::text::eq_ignore_case;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidYear,
    DuplicateCountry,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidYear => "invalid_year",
            ErrorCode::DuplicateCountry => "duplicate_country",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_year_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an integer year"))
        .with_value(ErrorCode::InvalidYear, value)
}

/// Trimmed country code, rejecting missing or blank values.
pub(crate) fn require_country_code(
    value: Option<String>,
    field: FieldName,
) -> Result<String, Error> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_year(value: Option<String>, field: FieldName) -> Result<i32, Error> {
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))?;
    raw.trim()
        .parse::<i32>()
        .map_err(|_| invalid_year_error(field, &raw))
}

/// Reject two country codes naming the same country, ignoring case.
pub(crate) fn require_distinct_countries(
    first: &str,
    second: &str,
    field: FieldName,
) -> Result<(), Error> {
    if eq_ignore_case(first, second) {
        let name = field.as_str();
        return Err(
            ValidationError::new(name, "country codes must name two different countries")
                .with_value(ErrorCode::DuplicateCountry, second),
        );
    }
    Ok(())
}

/// Flatten comma-separated and repeated values into trimmed, non-blank codes.
pub(crate) fn parse_country_codes<I, S>(values: I, field: FieldName) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let codes: Vec<String> = values
        .into_iter()
        .flat_map(|value| {
            value
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect();
    if codes.is_empty() {
        return Err(missing_field_error(field));
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const COUNTRY: FieldName = FieldName::new("countryCode");
    const YEAR: FieldName = FieldName::new("year");

    fn detail_code(error: &Error) -> Option<&str> {
        error.details()?.get("code")?.as_str()
    }

    #[rstest]
    #[case::plain(Some("NL"), "NL")]
    #[case::padded(Some("  nl "), "nl")]
    fn accepts_country_codes(#[case] raw: Option<&str>, #[case] expected: &str) {
        let code = require_country_code(raw.map(str::to_owned), COUNTRY).expect("valid code");
        assert_eq!(code, expected);
    }

    #[rstest]
    #[case::missing(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn rejects_missing_country_codes(#[case] raw: Option<&str>) {
        let error = require_country_code(raw.map(str::to_owned), COUNTRY).expect_err("invalid");
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(detail_code(&error), Some("missing_field"));
        assert_eq!(error.message(), "missing required field: countryCode");
    }

    #[rstest]
    #[case::plain("2025", 2025)]
    #[case::padded(" 2024 ", 2024)]
    #[case::negative("-1", -1)]
    fn parses_years(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(parse_year(Some(raw.to_owned()), YEAR).expect("year"), expected);
    }

    #[rstest]
    #[case::word("abc", "invalid_year")]
    #[case::decimal("2025.5", "invalid_year")]
    #[case::overflow("99999999999", "invalid_year")]
    #[case::blank(" ", "missing_field")]
    fn rejects_bad_years(#[case] raw: &str, #[case] code: &str) {
        let error = parse_year(Some(raw.to_owned()), YEAR).expect_err("invalid");
        assert_eq!(detail_code(&error), Some(code));
    }

    #[rstest]
    #[case::same("NL", "NL")]
    #[case::case_only("nl", "NL")]
    fn rejects_identical_countries(#[case] first: &str, #[case] second: &str) {
        let error = require_distinct_countries(first, second, FieldName::new("countryCode2"))
            .expect_err("duplicate");
        assert_eq!(detail_code(&error), Some("duplicate_country"));
    }

    #[rstest]
    fn accepts_distinct_countries() {
        assert!(require_distinct_countries("NL", "BE", FieldName::new("countryCode2")).is_ok());
    }

    #[rstest]
    #[case::comma_separated(&["US,NL,BE"], &["US", "NL", "BE"])]
    #[case::repeated(&["US", "NL"], &["US", "NL"])]
    #[case::mixed(&["US, NL", "BE"], &["US", "NL", "BE"])]
    #[case::blanks_dropped(&["US,,", " ", "NL"], &["US", "NL"])]
    #[case::duplicates_kept(&["NL,NL"], &["NL", "NL"])]
    fn flattens_country_code_lists(#[case] raw: &[&str], #[case] expected: &[&str]) {
        let codes = parse_country_codes(raw, FieldName::new("countryCodes")).expect("codes");
        assert_eq!(codes, expected);
    }

    #[rstest]
    #[case::none(&[])]
    #[case::only_blanks(&[" , ,"])]
    fn rejects_empty_country_code_lists(#[case] raw: &[&str]) {
        let error = parse_country_codes(raw, FieldName::new("countryCodes")).expect_err("empty");
        assert_eq!(detail_code(&error), Some("missing_field"));
    }
}
