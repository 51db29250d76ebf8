//! Monthly Report
//!
//! Generates the comprehensive report for one month: overview, income and
//! expense breakdowns, budget performance, savings, largest expenses, trends
//! against the previous month and a simple next-month projection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::models::{Budget, Money, MonthPeriod, Transaction, TransactionKind};
use crate::services::aggregate::{
    group_sum_by_category, summarize, top_expenses, total_by_kind, CategoryTotals, MonthlySummary,
};
use crate::services::budget::BudgetOverview;
use crate::services::chart::{distribution, ChartSlice};
use crate::services::filter::filter_by_period;
use crate::services::trend::{compare_periods, PeriodChange};
use crate::services::PeriodService;

/// Monthly Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// Month being reported
    pub period: MonthPeriod,
    /// Income, expense and net flow
    pub overview: MonthlySummary,
    pub income_by_source: CategoryTotals,
    pub expenses_by_category: CategoryTotals,
    pub expense_distribution: Vec<ChartSlice>,
    /// Budget versus actual, `None` when no budgets are set
    pub budget_performance: Option<BudgetOverview>,
    pub savings_rate: Option<f64>,
    /// Largest expenses of the month
    pub top_expenses: Vec<Transaction>,
    pub spending_change: PeriodChange,
    pub income_change: PeriodChange,
    /// Next month's net flow if this month repeats; needs both income and spending
    pub projected_net_flow: Option<Money>,
}

impl MonthlyReport {
    /// Generate the report for the month containing `reference`
    ///
    /// Returns `None` when there are neither transactions nor budgets.
    pub fn generate(
        settings: &Settings,
        transactions: &[Transaction],
        budgets: &[Budget],
        reference: NaiveDate,
    ) -> Option<Self> {
        if transactions.is_empty() && budgets.is_empty() {
            tracing::debug!("no transactions or budgets, monthly report skipped");
            return None;
        }

        let periods = PeriodService::new(settings);
        let period = periods.current_month(reference);
        let current = filter_by_period(transactions, period);
        let previous = filter_by_period(transactions, periods.previous_month(reference));

        let overview = summarize(&current);
        let expenses_by_category = group_sum_by_category(&current, TransactionKind::Expense);

        let budget_performance = if budgets.is_empty() {
            None
        } else {
            Some(BudgetOverview::generate(period, &current, budgets))
        };

        let projected_net_flow = if overview.income.is_positive() && overview.expense.is_positive() {
            Some(overview.balance)
        } else {
            None
        };

        tracing::info!(%period, transactions = current.len(), "generated monthly report");

        Some(Self {
            period,
            income_by_source: group_sum_by_category(&current, TransactionKind::Income),
            expense_distribution: distribution(&expenses_by_category, settings.chart_width),
            expenses_by_category,
            budget_performance,
            savings_rate: overview.savings_rate(),
            top_expenses: top_expenses(&current, settings.top_expenses),
            spending_change: compare_periods(
                overview.expense,
                total_by_kind(&previous, TransactionKind::Expense),
            ),
            income_change: compare_periods(
                overview.income,
                total_by_kind(&previous, TransactionKind::Income),
            ),
            projected_net_flow,
            overview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::budget::UtilizationStatus;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn m(minor: i64) -> Money {
        Money::from_minor(minor)
    }

    #[test]
    fn test_nothing_to_report() {
        let settings = Settings::default();
        assert!(MonthlyReport::generate(&settings, &[], &[], date(1, 1)).is_none());
    }

    #[test]
    fn test_budgets_only() {
        let settings = Settings::default();
        let budgets = vec![Budget::new("Food", m(10_000)).unwrap()];
        let report = MonthlyReport::generate(&settings, &[], &budgets, date(1, 20)).unwrap();

        assert_eq!(report.overview, MonthlySummary::default());
        assert_eq!(report.projected_net_flow, None);
        let performance = report.budget_performance.unwrap();
        assert_eq!(performance.rows[0].status, UtilizationStatus::Ok);
    }

    #[test]
    fn test_full_report() {
        let ledger = vec![
            Transaction::income(date(1, 1), "Salary", "", m(200_000)).unwrap(),
            Transaction::expense(date(1, 15), "Food", "Groceries", m(30_000)).unwrap(),
            Transaction::income(date(2, 1), "Salary", "", m(200_000)).unwrap(),
            Transaction::income(date(2, 3), "Freelance", "", m(50_000)).unwrap(),
            Transaction::expense(date(2, 4), "Food", "Groceries", m(45_000)).unwrap(),
            Transaction::expense(date(2, 5), "Bills", "Rent", m(80_000)).unwrap(),
            Transaction::expense(date(2, 6), "Food", "Dinner", m(5_000)).unwrap(),
        ];
        let budgets = vec![
            Budget::new("Food", m(60_000)).unwrap(),
            Budget::new("Bills", m(80_000)).unwrap(),
        ];
        let settings = Settings {
            top_expenses: 2,
            ..Settings::default()
        };

        let report = MonthlyReport::generate(&settings, &ledger, &budgets, date(2, 28)).unwrap();

        assert_eq!(report.overview.income.minor(), 250_000);
        assert_eq!(report.overview.expense.minor(), 130_000);
        assert_eq!(report.income_by_source.len(), 2);
        assert_eq!(report.expenses_by_category["Food"].minor(), 50_000);
        assert_eq!(report.top_expenses.len(), 2);
        assert_eq!(report.top_expenses[0].description(), "Rent");
        assert_eq!(report.projected_net_flow, Some(m(120_000)));
        assert!((report.savings_rate.unwrap() - 48.0).abs() < 1e-9);

        let performance = report.budget_performance.unwrap();
        assert_eq!(performance.rows[0].status, UtilizationStatus::Warning);
        assert_eq!(performance.rows[1].status, UtilizationStatus::Over);
        assert_eq!(performance.overspent_count(), 0);

        assert!(matches!(report.spending_change, PeriodChange::Changed { .. }));
        assert!(matches!(report.income_change, PeriodChange::Changed { .. }));
    }
}
