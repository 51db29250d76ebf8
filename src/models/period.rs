//! Month period representation
//!
//! A calendar year-month is the unit of aggregation for summaries and trends.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinanceError, FinanceResult};

/// A calendar year-month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> FinanceResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(FinanceError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(FinanceError::Validation(format!(
                "Year out of range: {}",
                year
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Fields are validated on construction, so the first of the month exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> FinanceResult<Self> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| FinanceError::Validation(format!("Invalid period format: {}", s)))?;

        let year: i32 = year
            .parse()
            .map_err(|_| FinanceError::Validation(format!("Invalid period format: {}", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| FinanceError::Validation(format!("Invalid period format: {}", s)))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthPeriod {
    type Error = FinanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthPeriod> for String {
    fn from(period: MonthPeriod) -> Self {
        period.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_month() {
        assert!(matches!(
            MonthPeriod::new(2025, 13),
            Err(FinanceError::InvalidMonth(13))
        ));
        assert!(matches!(
            MonthPeriod::new(2025, 0),
            Err(FinanceError::InvalidMonth(0))
        ));
        assert!(MonthPeriod::new(2025, 12).is_ok());
    }

    #[test]
    fn test_bounds() {
        let feb = MonthPeriod::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(feb.days_in_month(), 29);

        let dec = MonthPeriod::new(2025, 12).unwrap();
        assert_eq!(dec.last_day(), date(2025, 12, 31));
    }

    #[test]
    fn test_navigation() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthPeriod::new(2024, 12).unwrap());
        assert_eq!(jan.next(), MonthPeriod::new(2025, 2).unwrap());
        assert_eq!(jan.prev().next(), jan);
    }

    #[test]
    fn test_contains() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 31)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_parse_and_display() {
        let period = MonthPeriod::parse("2025-03").unwrap();
        assert_eq!(period, MonthPeriod::new(2025, 3).unwrap());
        assert_eq!(period.to_string(), "2025-03");
        assert!(MonthPeriod::parse("2025").is_err());
        assert!(MonthPeriod::parse("2025-14").is_err());
    }

    #[test]
    fn test_serialization() {
        let period = MonthPeriod::new(2025, 1).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2025-01\"");

        let deserialized: MonthPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
        assert!(serde_json::from_str::<MonthPeriod>("\"2025-13\"").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = MonthPeriod::new(2024, 12).unwrap();
        let b = MonthPeriod::new(2025, 1).unwrap();
        assert!(a < b);
    }
}
