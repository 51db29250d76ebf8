//! Budget evaluation
//!
//! Compares each category's spend against its monthly budget and classifies
//! utilization. Threshold checks use integer cross-multiplication so that the
//! 70% and 100% edges are exact.

use serde::Serialize;
use std::fmt;

use super::aggregate::{group_sum_by_category, CategoryTotals};
use crate::models::{Budget, Money, MonthPeriod, Transaction, TransactionKind};

/// Utilization at which a budget is reported as WARNING
pub const WARNING_PERCENT: i64 = 70;

/// Utilization at which a budget is reported as OVER
pub const OVER_PERCENT: i64 = 100;

/// Overall utilization at or above which spending should be reviewed
pub const REVIEW_OVERALL_PERCENT: f64 = 90.0;

/// Overall utilization below which the month is on track
pub const ON_TRACK_OVERALL_PERCENT: f64 = 50.0;

/// Utilization status of a single budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UtilizationStatus {
    Ok,
    Warning,
    Over,
}

impl fmt::Display for UtilizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "WARNING"),
            Self::Over => write!(f, "OVER"),
        }
    }
}

/// Whether `spent` is at least `percent`% of `budgeted`
///
/// Always false for a zero budget, which reports 0% utilization.
pub fn reaches_percent(spent: Money, budgeted: Money, percent: i64) -> bool {
    if !budgeted.is_positive() {
        return false;
    }
    i128::from(spent.minor()) * 100 >= i128::from(budgeted.minor()) * i128::from(percent)
}

/// Spend as a percentage of the budget, 0 for a zero budget
pub fn utilization_percent(spent: Money, budgeted: Money) -> f64 {
    if budgeted.is_positive() {
        spent.percent_of(budgeted)
    } else {
        0.0
    }
}

/// Classify utilization: OVER at 100%, WARNING from 70%, otherwise OK
pub fn utilization_status(spent: Money, budgeted: Money) -> UtilizationStatus {
    if reaches_percent(spent, budgeted, OVER_PERCENT) {
        UtilizationStatus::Over
    } else if reaches_percent(spent, budgeted, WARNING_PERCENT) {
        UtilizationStatus::Warning
    } else {
        UtilizationStatus::Ok
    }
}

/// A budget compared against its category's spend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEvaluation {
    pub category: String,
    pub budgeted: Money,
    pub spent: Money,
    /// budgeted - spent, negative when overspent
    pub remaining: Money,
    /// Spend as a percentage of the budget
    pub utilization: f64,
    pub status: UtilizationStatus,
}

impl BudgetEvaluation {
    /// Evaluate one budget against a known spend
    pub fn new(budget: &Budget, spent: Money) -> Self {
        Self {
            category: budget.category().to_string(),
            budgeted: budget.amount(),
            spent,
            remaining: budget.amount() - spent,
            utilization: utilization_percent(spent, budget.amount()),
            status: utilization_status(spent, budget.amount()),
        }
    }

    /// Spend strictly exceeds the budgeted amount
    ///
    /// Unlike the OVER status this applies to zero budgets too, and spending
    /// exactly the budget is not overspending.
    pub fn is_overspent(&self) -> bool {
        self.spent > self.budgeted
    }
}

/// Evaluate every budget against expense transactions
///
/// Budgeted categories without spending are evaluated at zero spend.
pub fn evaluate_budgets(transactions: &[Transaction], budgets: &[Budget]) -> Vec<BudgetEvaluation> {
    let spending = group_sum_by_category(transactions, TransactionKind::Expense);
    evaluate_against(&spending, budgets)
}

/// Evaluate every budget against precomputed category spending
pub fn evaluate_against(spending: &CategoryTotals, budgets: &[Budget]) -> Vec<BudgetEvaluation> {
    budgets
        .iter()
        .map(|budget| {
            let spent = spending
                .get(budget.category())
                .copied()
                .unwrap_or_default();
            BudgetEvaluation::new(budget, spent)
        })
        .collect()
}

/// Total spend over total budget, as a percentage (0 with no budget)
pub fn overall_utilization(evaluations: &[BudgetEvaluation]) -> f64 {
    let budgeted: Money = evaluations.iter().map(|e| e.budgeted).sum();
    let spent: Money = evaluations.iter().map(|e| e.spent).sum();
    utilization_percent(spent, budgeted)
}

/// Categories whose spend strictly exceeds their budget, in budget order
pub fn overspent_categories(evaluations: &[BudgetEvaluation]) -> Vec<String> {
    evaluations
        .iter()
        .filter(|e| e.is_overspent())
        .map(|e| e.category.clone())
        .collect()
}

/// Advice derived from overall utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallAdvice {
    /// 90% or more of the total budget is used
    ReviewSpending,
    /// Less than half of the total budget is used
    OnTrack,
}

impl fmt::Display for OverallAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReviewSpending => write!(f, "Review your spending for the month!"),
            Self::OnTrack => write!(f, "You're doing great with your budget!"),
        }
    }
}

/// Budget versus actual for a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub period: MonthPeriod,
    pub rows: Vec<BudgetEvaluation>,
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub overall_utilization: f64,
    /// Categories with OVER status
    pub over_limit: Vec<String>,
    pub advice: Option<OverallAdvice>,
}

impl BudgetOverview {
    /// Build the overview from the month's transactions
    ///
    /// `transactions` should already be restricted to `period`.
    /// A category budgeted more than once is shown with its latest amount.
    pub fn generate(period: MonthPeriod, transactions: &[Transaction], budgets: &[Budget]) -> Self {
        let budgets = Budget::latest_per_category(budgets);
        let rows = evaluate_budgets(transactions, &budgets);
        let total_budgeted: Money = rows.iter().map(|r| r.budgeted).sum();
        let total_spent: Money = rows.iter().map(|r| r.spent).sum();
        let overall = overall_utilization(&rows);

        let over_limit = rows
            .iter()
            .filter(|r| r.status == UtilizationStatus::Over)
            .map(|r| r.category.clone())
            .collect();

        let advice = if rows.is_empty() {
            None
        } else if overall >= REVIEW_OVERALL_PERCENT {
            Some(OverallAdvice::ReviewSpending)
        } else if overall < ON_TRACK_OVERALL_PERCENT {
            Some(OverallAdvice::OnTrack)
        } else {
            None
        };

        tracing::debug!(
            %period,
            budgets = rows.len(),
            overall_utilization = overall,
            "evaluated budgets"
        );

        Self {
            period,
            rows,
            total_budgeted,
            total_spent,
            total_remaining: total_budgeted - total_spent,
            overall_utilization: overall,
            over_limit,
            advice,
        }
    }

    /// Count of categories whose spend exceeds their budget
    pub fn overspent_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_overspent()).count()
    }
}

/// The total monthly budget spread evenly over the days of `period`
///
/// `None` when no budgets are set.
pub fn daily_budget(budgets: &[Budget], period: MonthPeriod) -> Option<Money> {
    if budgets.is_empty() {
        return None;
    }
    let monthly: Money = Budget::latest_per_category(budgets)
        .iter()
        .map(Budget::amount)
        .sum();
    Some(monthly.divide_rounded(period.days_in_month()))
}
