//! Stability of a short series of period totals
//!
//! A series is stable when every later total stays within 10% of the oldest
//! one. The comparison is done in integer arithmetic so the band edge is exact.

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Number of periods a stability verdict needs
pub const STABILITY_PERIODS: usize = 3;

/// Tolerance band, as a percentage of the oldest total
pub const STABILITY_TOLERANCE_PERCENT: i128 = 10;

/// Stability verdict for a series of period totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Fluctuating,
    InsufficientData,
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "Stable"),
            Self::Fluctuating => write!(f, "Fluctuating"),
            Self::InsufficientData => write!(f, "Insufficient data"),
        }
    }
}

/// Classify a chronological series of totals (oldest first)
///
/// Fewer than three totals is `InsufficientData`. A zero baseline collapses
/// the band to a single point: only an all-zero series is stable.
pub fn classify_stability(totals: &[Money]) -> Stability {
    let Some((baseline, later)) = totals.split_first() else {
        return Stability::InsufficientData;
    };
    if totals.len() < STABILITY_PERIODS {
        return Stability::InsufficientData;
    }

    if baseline.is_zero() {
        return if later.iter().all(Money::is_zero) {
            Stability::Stable
        } else {
            Stability::Fluctuating
        };
    }

    let band = i128::from(baseline.minor()).abs() * STABILITY_TOLERANCE_PERCENT;
    let within = later.iter().all(|total| {
        let deviation = (i128::from(total.minor()) - i128::from(baseline.minor())).abs();
        deviation * 100 <= band
    });

    if within {
        Stability::Stable
    } else {
        Stability::Fluctuating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_minor).collect()
    }

    #[test]
    fn test_within_band_is_stable() {
        assert_eq!(classify_stability(&series(&[1000, 1050, 950])), Stability::Stable);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        assert_eq!(classify_stability(&series(&[1000, 1100, 900])), Stability::Stable);
        assert_eq!(
            classify_stability(&series(&[1000, 1101, 1000])),
            Stability::Fluctuating
        );
        assert_eq!(
            classify_stability(&series(&[1000, 1000, 899])),
            Stability::Fluctuating
        );
    }

    #[test]
    fn test_outside_band_is_fluctuating() {
        assert_eq!(
            classify_stability(&series(&[1000, 1200, 900])),
            Stability::Fluctuating
        );
    }

    #[test]
    fn test_zero_baseline() {
        assert_eq!(classify_stability(&series(&[0, 0, 0])), Stability::Stable);
        assert_eq!(classify_stability(&series(&[0, 50, 0])), Stability::Fluctuating);
        assert_eq!(classify_stability(&series(&[0, 0, 1])), Stability::Fluctuating);
    }

    #[test]
    fn test_short_series() {
        assert_eq!(classify_stability(&[]), Stability::InsufficientData);
        assert_eq!(classify_stability(&series(&[1000])), Stability::InsufficientData);
        assert_eq!(
            classify_stability(&series(&[1000, 1000])),
            Stability::InsufficientData
        );
    }

    #[test]
    fn test_negative_baseline_uses_magnitude() {
        assert_eq!(classify_stability(&series(&[-1000, -950, -1100])), Stability::Stable);
        assert_eq!(classify_stability(&series(&[-1000, 0, -1000])), Stability::Fluctuating);
    }
}
