//! Reports module for the finance tracker
//!
//! Composed analyses built from the service layer: spending, income and
//! savings analyses, the monthly report and the daily check. Every report
//! takes the whole ledger plus an explicit reference date and derives its
//! month windows from there.

pub mod daily;
pub mod income;
pub mod monthly;
pub mod savings;
pub mod spending;

pub use daily::DailyCheck;
pub use income::IncomeAnalysis;
pub use monthly::MonthlyReport;
pub use savings::SavingsAnalysis;
pub use spending::SpendingAnalysis;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::models::{Money, MonthPeriod, Transaction};
use crate::services::aggregate::{monthly_summary, MonthlySummary};
use crate::services::PeriodService;

/// Number of months in trend and stability windows
pub const TREND_MONTHS: usize = 3;

/// One month's value in a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodTotal {
    pub period: MonthPeriod,
    pub amount: Money,
}

/// Trailing month totals ending with the reference month, oldest first
pub(crate) fn trailing_totals(
    settings: &Settings,
    transactions: &[Transaction],
    reference: NaiveDate,
    pick: impl Fn(&MonthlySummary) -> Money,
) -> Vec<PeriodTotal> {
    PeriodService::new(settings)
        .trailing_months(reference, TREND_MONTHS)
        .into_iter()
        .map(|period| PeriodTotal {
            period,
            amount: pick(&monthly_summary(transactions, period)),
        })
        .collect()
}

/// Amounts of a trend series, in order
pub(crate) fn amounts(series: &[PeriodTotal]) -> Vec<Money> {
    series.iter().map(|t| t.amount).collect()
}
