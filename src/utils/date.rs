use chrono::{Local, NaiveDate};

/// Storage and prompt format for transaction dates (`mm-dd-yyyy`).
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Format used for audit-log timestamps.
pub const TIMESTAMP_FORMAT: &str = "%m-%d-%Y %I:%M:%S %p";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time formatted as an audit-log timestamp.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Serde adapter storing a `NaiveDate` as `mm-dd-yyyy`.
pub mod serde_mdy {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }
}
