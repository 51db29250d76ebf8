//! Spending alerts and recommendations
//!
//! Pure rule evaluation over a month of transactions and the budgets in
//! force. Alerts and recommendations are separate channels; both keep the
//! order in which their rules fire.

use serde::Serialize;
use std::fmt;

use super::aggregate::summarize;
use super::budget::{evaluate_budgets, reaches_percent, utilization_percent};
use crate::config::Settings;
use crate::models::{Budget, Money, Transaction};

/// Utilization at which a budget is reported as approaching its limit
pub const APPROACHING_LIMIT_PERCENT: i64 = 80;

/// Utilization at which a budget is reported as exceeded
pub const EXCEEDED_PERCENT: i64 = 100;

/// An expense strictly above this share of monthly income is flagged
pub const LARGE_TRANSACTION_PERCENT: i64 = 20;

/// Savings rate below which a recommendation is made
pub const LOW_SAVINGS_RATE_PERCENT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// What an alert is about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertKind {
    ApproachingLimit { category: String, utilization: f64 },
    BudgetExceeded { category: String, utilization: f64 },
    LargeTransaction { transaction: Transaction },
}

/// A spending alert with its rendered message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub kind: AlertKind,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// What a recommendation is about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecommendationKind {
    OverBudget { categories: Vec<String> },
    LowSavingsRate { rate: f64 },
    NoBudgets,
    KeepItUp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Service producing alerts and recommendations
pub struct AdvisorService<'a> {
    settings: &'a Settings,
}

impl<'a> AdvisorService<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Alerts for a month: budget alerts in budget order, then large expenses
    /// in ledger order
    ///
    /// `transactions` should already be restricted to the month.
    pub fn alerts(&self, transactions: &[Transaction], budgets: &[Budget]) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for budget in &Budget::latest_per_category(budgets) {
            let spent: Money = transactions
                .iter()
                .filter(|t| t.is_expense() && t.category() == budget.category())
                .map(|t| t.amount())
                .sum();

            let utilization = utilization_percent(spent, budget.amount());
            let category = budget.category().to_string();

            if reaches_percent(spent, budget.amount(), EXCEEDED_PERCENT) {
                alerts.push(Alert {
                    severity: AlertSeverity::Critical,
                    message: format!(
                        "Exceeded budget for '{}'. ({:.0}% used)",
                        category, utilization
                    ),
                    kind: AlertKind::BudgetExceeded {
                        category,
                        utilization,
                    },
                });
            } else if reaches_percent(spent, budget.amount(), APPROACHING_LIMIT_PERCENT) {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    message: format!(
                        "Approaching budget limit for '{}'. ({:.0}% used)",
                        category, utilization
                    ),
                    kind: AlertKind::ApproachingLimit {
                        category,
                        utilization,
                    },
                });
            }
        }

        let income = summarize(transactions).income;
        if income.is_positive() {
            // amount > income * 20%  <=>  amount * 100 > income * 20
            let threshold = i128::from(income.minor()) * i128::from(LARGE_TRANSACTION_PERCENT);
            for txn in transactions.iter().filter(|t| t.is_expense()) {
                if i128::from(txn.amount().minor()) * 100 > threshold {
                    alerts.push(Alert {
                        severity: AlertSeverity::Warning,
                        message: format!(
                            "Large transaction detected: {} for '{}' ({}).",
                            self.money(txn.amount()),
                            txn.description(),
                            txn.category()
                        ),
                        kind: AlertKind::LargeTransaction {
                            transaction: txn.clone(),
                        },
                    });
                }
            }
        }

        tracing::debug!(count = alerts.len(), "generated alerts");
        alerts
    }

    /// Recommendations for a month
    ///
    /// `transactions` should already be restricted to the month.
    pub fn recommendations(
        &self,
        transactions: &[Transaction],
        budgets: &[Budget],
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let budgeted = Budget::latest_per_category(budgets);
        let over: Vec<String> = evaluate_budgets(transactions, &budgeted)
            .into_iter()
            .filter(|e| e.is_overspent())
            .map(|e| e.category)
            .collect();
        if !over.is_empty() {
            recommendations.push(Recommendation {
                message: format!(
                    "You've gone over budget in {}. Consider reviewing spending in these areas.",
                    over.join(", ")
                ),
                kind: RecommendationKind::OverBudget { categories: over },
            });
        }

        let summary = summarize(transactions);
        if let Some(rate) = summary.savings_rate() {
            // rate < 10%  <=>  balance * 100 < income * 10
            let low = i128::from(summary.balance.minor()) * 100
                < i128::from(summary.income.minor()) * i128::from(LOW_SAVINGS_RATE_PERCENT);
            if low {
                recommendations.push(Recommendation {
                    message: format!(
                        "Your savings rate is {:.2}%. Aim for at least 10-20%. Look for small expenses to cut.",
                        rate
                    ),
                    kind: RecommendationKind::LowSavingsRate { rate },
                });
            }
        }

        if budgets.is_empty() {
            recommendations.push(Recommendation {
                message: "You haven't set any budgets. Create budgets for top spending categories to get better control of your finances.".to_string(),
                kind: RecommendationKind::NoBudgets,
            });
        } else if recommendations.is_empty() {
            recommendations.push(Recommendation {
                message: "You are doing a great job staying within your budget and saving money. Keep it up!".to_string(),
                kind: RecommendationKind::KeepItUp,
            });
        }

        recommendations
    }
}
