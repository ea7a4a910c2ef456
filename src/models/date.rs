//! Date and month-key types
//!
//! Entry dates are kept as ISO text. Dates typed on the form are validated,
//! while imported dates are kept verbatim; month filtering only looks at the
//! `YYYY-MM` prefix.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar date of a transaction (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    /// Today's date on the local clock
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    /// Parse a date typed on the entry form
    pub fn parse(text: &str) -> Result<Self, LedgerError> {
        let date = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
            LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", text))
        })?;
        Ok(Self::from(date))
    }

    /// Keep a date exactly as it appeared in an imported file
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The `YYYY-MM` prefix (or the whole text if it is shorter)
    pub fn month_prefix(&self) -> &str {
        match self.0.char_indices().nth(7) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar month used to filter transactions (`YYYY-MM`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(String);

impl MonthKey {
    /// The current month on the local clock
    pub fn current() -> Self {
        Self(Local::now().date_naive().format("%Y-%m").to_string())
    }

    /// Parse and validate a `YYYY-MM` key
    pub fn parse(text: &str) -> Result<Self, LedgerError> {
        let text = text.trim();
        let well_formed = text.len() == 7
            && text.as_bytes()[4] == b'-'
            && NaiveDate::parse_from_str(&format!("{}-01", text), DATE_FORMAT).is_ok();

        if !well_formed {
            return Err(LedgerError::Validation(format!(
                "Invalid month: '{}'. Use YYYY-MM",
                text
            )));
        }
        Ok(Self(text.to_string()))
    }

    /// Check whether a transaction date falls in this month
    pub fn contains(&self, date: &EntryDate) -> bool {
        date.month_prefix() == self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let date = EntryDate::parse("2024-03-01").unwrap();
        assert_eq!(date.as_str(), "2024-03-01");
        assert!(EntryDate::parse("2024/03/01").is_err());
        assert!(EntryDate::parse("2024-02-30").is_err());
    }

    #[test]
    fn test_month_prefix() {
        assert_eq!(EntryDate::verbatim("2024-01-31").month_prefix(), "2024-01");
        assert_eq!(EntryDate::verbatim("2024").month_prefix(), "2024");
        assert_eq!(EntryDate::verbatim("").month_prefix(), "");
    }

    #[test]
    fn test_month_boundary() {
        let date = EntryDate::verbatim("2024-01-31");
        assert!(MonthKey::parse("2024-01").unwrap().contains(&date));
        assert!(!MonthKey::parse("2024-02").unwrap().contains(&date));
    }

    #[test]
    fn test_month_key_validation() {
        assert!(MonthKey::parse("2024-12").is_ok());
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024-1").is_err());
        assert!(MonthKey::parse("202401").is_err());
        assert!("2024-05".parse::<MonthKey>().is_ok());
    }

    #[test]
    fn test_today_matches_current_month() {
        let today = EntryDate::today();
        assert!(MonthKey::current().contains(&today));
    }
}
