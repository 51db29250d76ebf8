//! Spending Analysis
//!
//! Current month spending by category, compared with the previous month and
//! with the trailing three-month trend.

use chrono::NaiveDate;
use serde::Serialize;

use super::{amounts, trailing_totals, PeriodTotal};
use crate::config::Settings;
use crate::models::{Money, MonthPeriod, Transaction, TransactionKind};
use crate::services::aggregate::{
    average_daily_expense, group_sum_by_category, top_categories, total_by_kind, CategoryAmount,
    CategoryTotals,
};
use crate::services::chart::{distribution, ChartSlice};
use crate::services::filter::filter_by_period;
use crate::services::trend::{compare_periods, series_direction, PeriodChange, TrendDirection};
use crate::services::PeriodService;

/// Spending Analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingAnalysis {
    /// Month containing the reference date
    pub period: MonthPeriod,
    /// Total spending this month
    pub total: Money,
    pub by_category: CategoryTotals,
    pub distribution: Vec<ChartSlice>,
    pub top_categories: Vec<CategoryAmount>,
    /// Spend per elapsed day, only when the month has transactions
    pub average_daily: Option<Money>,
    pub vs_last_month: PeriodChange,
    /// Spending over the trailing months, oldest first
    pub trend: Vec<PeriodTotal>,
    pub trend_direction: Option<TrendDirection>,
}

impl SpendingAnalysis {
    /// Analyse spending for the month containing `reference`
    pub fn generate(settings: &Settings, transactions: &[Transaction], reference: NaiveDate) -> Self {
        let periods = PeriodService::new(settings);
        let period = periods.current_month(reference);

        let current = filter_by_period(transactions, period);
        let previous = filter_by_period(transactions, periods.previous_month(reference));

        let by_category = group_sum_by_category(&current, TransactionKind::Expense);
        let total: Money = by_category.values().sum();
        let last_total = total_by_kind(&previous, TransactionKind::Expense);

        let average_daily = if current.is_empty() {
            None
        } else {
            Some(average_daily_expense(total, reference))
        };

        let trend = trailing_totals(settings, transactions, reference, |s| s.expense);
        let trend_direction = series_direction(&amounts(&trend));

        Self {
            period,
            total,
            distribution: distribution(&by_category, settings.chart_width),
            top_categories: top_categories(&by_category, settings.top_categories),
            by_category,
            average_daily,
            vs_last_month: compare_periods(total, last_total),
            trend,
            trend_direction,
        }
    }
}
