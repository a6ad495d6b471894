//! DTOs for decoding holiday provider JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records (`HolidayRecord`) in one pass. Dates stay strings until mapping so
//! a malformed date names the offending entry.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::HolidayRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HolidayDto {
    pub(super) date: String,
    pub(super) local_name: Option<String>,
    pub(super) name: Option<String>,
    pub(super) country_code: Option<String>,
    pub(super) fixed: Option<bool>,
    pub(super) global: Option<bool>,
    pub(super) counties: Option<Vec<String>>,
    pub(super) launch_year: Option<i32>,
    #[serde(default)]
    pub(super) types: Option<Vec<String>>,
}

impl HolidayDto {
    pub(super) fn into_domain(self) -> Result<HolidayRecord, String> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|error| format!("holiday date {:?} is not YYYY-MM-DD: {error}", self.date))?;
        Ok(HolidayRecord {
            date,
            local_name: self.local_name,
            name: self.name,
            country_code: self.country_code,
            fixed: self.fixed,
            global: self.global,
            counties: self.counties,
            launch_year: self.launch_year,
            types: self.types.unwrap_or_default(),
        })
    }
}

pub(super) fn into_domain_records(dtos: Vec<HolidayDto>) -> Result<Vec<HolidayRecord>, String> {
    dtos.into_iter().map(HolidayDto::into_domain).collect()
}
