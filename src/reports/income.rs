//! Income Analysis
//!
//! Current month income by source, the change from last month and whether
//! income has held steady over the trailing months.

use chrono::NaiveDate;
use serde::Serialize;

use super::{amounts, trailing_totals, PeriodTotal};
use crate::config::Settings;
use crate::models::{Money, MonthPeriod, Transaction, TransactionKind};
use crate::services::aggregate::{group_sum_by_category, total_by_kind, CategoryTotals};
use crate::services::filter::filter_by_period;
use crate::services::stability::{classify_stability, Stability};
use crate::services::trend::{compare_periods, PeriodChange};
use crate::services::PeriodService;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeAnalysis {
    pub period: MonthPeriod,
    pub total: Money,
    pub by_source: CategoryTotals,
    pub vs_last_month: PeriodChange,
    /// Income over the trailing months, oldest first
    pub history: Vec<PeriodTotal>,
    pub stability: Stability,
}

impl IncomeAnalysis {
    pub fn generate(settings: &Settings, transactions: &[Transaction], reference: NaiveDate) -> Self {
        let periods = PeriodService::new(settings);
        let period = periods.current_month(reference);

        let current = filter_by_period(transactions, period);
        let previous = filter_by_period(transactions, periods.previous_month(reference));

        let by_source = group_sum_by_category(&current, TransactionKind::Income);
        let total: Money = by_source.values().sum();
        let last_total = total_by_kind(&previous, TransactionKind::Income);

        let history = trailing_totals(settings, transactions, reference, |s| s.income);
        let stability = classify_stability(&amounts(&history));

        tracing::debug!(%period, %total, %stability, "analysed income");

        Self {
            period,
            total,
            by_source,
            vs_last_month: compare_periods(total, last_total),
            history,
            stability,
        }
    }
}
