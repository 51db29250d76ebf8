//! Period-over-period comparison and trend direction

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Direction of change between two period totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UPWARD"),
            Self::Down => write!(f, "DOWNWARD"),
            Self::Stable => write!(f, "STABLE"),
        }
    }
}

/// Outcome of comparing a period total against the previous one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeriodChange {
    /// The previous period had activity; `percent` is relative to it
    Changed {
        percent: f64,
        direction: TrendDirection,
    },
    /// Nothing in the previous period, something in the current one
    New,
    /// Nothing in either period
    NoActivity,
}

/// Percent change from `previous` to `current`
///
/// `None` when `previous` is zero: there is no baseline to compare against.
pub fn percent_change(current: Money, previous: Money) -> Option<f64> {
    if previous.is_zero() {
        return None;
    }
    let delta = (current - previous).minor() as f64;
    Some(delta / previous.minor() as f64 * 100.0)
}

/// Direction of `current` relative to `previous`
pub fn classify_direction(current: Money, previous: Money) -> TrendDirection {
    match current.cmp(&previous) {
        std::cmp::Ordering::Greater => TrendDirection::Up,
        std::cmp::Ordering::Less => TrendDirection::Down,
        std::cmp::Ordering::Equal => TrendDirection::Stable,
    }
}

/// Compare two period totals, handling a zero baseline explicitly
pub fn compare_periods(current: Money, previous: Money) -> PeriodChange {
    match percent_change(current, previous) {
        Some(percent) => PeriodChange::Changed {
            percent,
            direction: classify_direction(current, previous),
        },
        None if current.is_zero() => PeriodChange::NoActivity,
        None => PeriodChange::New,
    }
}

/// Direction of the most recent step in a chronological series
///
/// `None` for fewer than two totals.
pub fn series_direction(totals: &[Money]) -> Option<TrendDirection> {
    match totals {
        [.., previous, current] => Some(classify_direction(*current, *previous)),
        _ => None,
    }
}
