//! Savings Analysis

use chrono::NaiveDate;
use serde::Serialize;

use super::{amounts, trailing_totals, PeriodTotal};
use crate::config::Settings;
use crate::models::{MonthPeriod, Transaction};
use crate::services::aggregate::{monthly_summary, MonthlySummary};
use crate::services::trend::{series_direction, TrendDirection};

/// Savings for the reference month and the trailing trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsAnalysis {
    pub period: MonthPeriod,
    pub summary: MonthlySummary,
    /// `None` when the month has no income
    pub savings_rate: Option<f64>,
    /// Net savings over the trailing months, oldest first
    pub history: Vec<PeriodTotal>,
    pub trend_direction: Option<TrendDirection>,
}

impl SavingsAnalysis {
    pub fn generate(settings: &Settings, transactions: &[Transaction], reference: NaiveDate) -> Self {
        let period = MonthPeriod::of(reference);
        let summary = monthly_summary(transactions, period);

        let history = trailing_totals(settings, transactions, reference, |s| s.balance);
        let trend_direction = series_direction(&amounts(&history));

        Self {
            period,
            savings_rate: summary.savings_rate(),
            summary,
            history,
            trend_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, 5).unwrap()
    }

    #[test]
    fn test_savings_analysis() {
        let ledger = vec![
            Transaction::income(date(1), "Salary", "", Money::from_minor(100_000)).unwrap(),
            Transaction::expense(date(1), "Food", "", Money::from_minor(20_000)).unwrap(),
            Transaction::income(date(2), "Salary", "", Money::from_minor(100_000)).unwrap(),
            Transaction::expense(date(2), "Food", "", Money::from_minor(60_000)).unwrap(),
        ];
        let settings = Settings::default();
        let analysis = SavingsAnalysis::generate(&settings, &ledger, date(2));

        assert_eq!(analysis.summary.balance.minor(), 40_000);
        assert_eq!(analysis.savings_rate, Some(40.0));
        let history: Vec<i64> = analysis.history.iter().map(|t| t.amount.minor()).collect();
        assert_eq!(history, vec![0, 80_000, 40_000]);
        assert_eq!(analysis.trend_direction, Some(TrendDirection::Down));
    }

    #[test]
    fn test_no_income() {
        let settings = Settings::default();
        let analysis = SavingsAnalysis::generate(&settings, &[], date(3));
        assert_eq!(analysis.savings_rate, None);
        assert_eq!(analysis.summary, MonthlySummary::default());
    }
}
