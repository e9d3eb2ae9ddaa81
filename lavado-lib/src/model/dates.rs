//! Lenient date (de)serialization
//!
//! The API stores calendar dates either as `YYYY-MM-DD` or as a full
//! RFC 3339 timestamp at midnight UTC, depending on which form wrote them.
//! Both read as a [`NaiveDate`]; dates are always written as `YYYY-MM-DD`.

use chrono::DateTime;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serializer;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date from either accepted form.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 15);
        assert_eq!(parse_date("2024-06-15"), expected);
        assert_eq!(parse_date("2024-06-15T00:00:00.000Z"), expected);
        assert_eq!(parse_date("15/06/2024"), None);
    }
}
