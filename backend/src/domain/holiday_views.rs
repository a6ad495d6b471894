//! Result values produced by the holiday aggregation use-cases.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::text::eq_ignore_case;

/// Separator used when one country observes several holidays on one date.
pub const NAME_SEPARATOR: &str = ", ";

/// Countries ordered by their count of weekday public holidays.
///
/// Iteration order is descending by count; countries with equal counts keep
/// the order in which they were first supplied. Serialises as a JSON object
/// whose keys follow that order.
///
/// # Examples
/// ```
/// use holidays_api::domain::PublicHolidayRanking;
///
/// let ranking = PublicHolidayRanking::from_counts(vec![
///     ("US".to_owned(), 13),
///     ("NL".to_owned(), 7),
///     ("BE".to_owned(), 9),
/// ]);
/// let order: Vec<_> = ranking.iter().map(|(code, _)| code).collect();
/// assert_eq!(order, ["US", "BE", "NL"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicHolidayRanking(Vec<(String, usize)>);

impl PublicHolidayRanking {
    /// Rank `counts`, given in first-seen order with no repeated codes.
    #[must_use]
    pub fn from_counts(mut counts: Vec<(String, usize)>) -> Self {
        counts.sort_by(|(_, left), (_, right)| right.cmp(left));
        Self(counts)
    }

    /// Iterate `(country code, count)` pairs in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(code, count)| (code.as_str(), *count))
    }

    /// Count recorded for `country_code`, if ranked.
    #[must_use]
    pub fn get(&self, country_code: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(code, _)| code == country_code)
            .map(|(_, count)| *count)
    }

    /// Number of ranked countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no country was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PublicHolidayRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Holiday dates shared by two countries, with each country's names.
///
/// Dates iterate in ascending order. Under each date every contributing
/// country maps to its display names, joined with [`NAME_SEPARATOR`] when it
/// observes more than one holiday that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonHolidays(BTreeMap<NaiveDate, BTreeMap<String, Vec<String>>>);

impl CommonHolidays {
    /// Record `name` for `country_code` on `date`.
    ///
    /// A name already recorded for that country and date (ignoring case) is
    /// not added again.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use holidays_api::domain::CommonHolidays;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 5, 29).expect("valid date");
    /// let mut common = CommonHolidays::default();
    /// common.merge(date, "BE", "O.L.H. Hemelvaart");
    /// common.merge(date, "BE", "o.l.h. hemelvaart");
    /// common.merge(date, "BE", "Vaderdag");
    /// assert_eq!(
    ///     common.name(date, "BE").as_deref(),
    ///     Some("O.L.H. Hemelvaart, Vaderdag"),
    /// );
    /// ```
    pub fn merge(&mut self, date: NaiveDate, country_code: &str, name: &str) {
        let names = self
            .0
            .entry(date)
            .or_default()
            .entry(country_code.to_owned())
            .or_default();
        if !names.iter().any(|existing| eq_ignore_case(existing, name)) {
            names.push(name.to_owned());
        }
    }

    /// Joined display names for `country_code` on `date`.
    #[must_use]
    pub fn name(&self, date: NaiveDate, country_code: &str) -> Option<String> {
        self.0
            .get(&date)
            .and_then(|countries| countries.get(country_code))
            .map(|names| names.join(NAME_SEPARATOR))
    }

    /// Shared dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    /// Country codes recorded under `date`.
    pub fn countries_on(&self, date: NaiveDate) -> impl Iterator<Item = &str> {
        self.0
            .get(&date)
            .into_iter()
            .flat_map(|countries| countries.keys().map(String::as_str))
    }

    /// Number of shared dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the two countries share no holiday dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct JoinedNames<'a>(&'a BTreeMap<String, Vec<String>>);

impl Serialize for JoinedNames<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (country_code, names) in self.0 {
            map.serialize_entry(country_code, &names.join(NAME_SEPARATOR))?;
        }
        map.end()
    }
}

impl Serialize for CommonHolidays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (date, countries) in &self.0 {
            map.serialize_entry(&date.to_string(), &JoinedNames(countries))?;
        }
        map.end()
    }
}
