//! Financial health score
//!
//! A 0-100 score built from four independently capped factors:
//!
//! | Factor             | Max | Rule                                                   |
//! |--------------------|-----|--------------------------------------------------------|
//! | Savings rate       | 30  | >=20% 30, >=10% 20, >0% 10, else 0; N/A without income |
//! | Budget adherence   | 25  | none over 25, at most half over 15, else 5; 0 unbudgeted|
//! | Income vs expense  | 25  | income > expense 25, equal 15, less 5; 0 without income|
//! | Debt management    | 20  | fixed 10 until debts are tracked                       |
//!
//! Weights and bands are fixed business rules.

use serde::Serialize;
use std::fmt;

use super::aggregate::{summarize, MonthlySummary};
use super::budget::evaluate_budgets;
use crate::models::{Budget, Transaction};

pub const SAVINGS_RATE_MAX: u32 = 30;
pub const BUDGET_ADHERENCE_MAX: u32 = 25;
pub const INCOME_VS_EXPENSE_MAX: u32 = 25;
pub const DEBT_MANAGEMENT_MAX: u32 = 20;

/// Neutral debt score while no debt tracking exists
pub const DEBT_PLACEHOLDER_POINTS: u32 = 10;

/// Points awarded for one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FactorScore {
    Scored { points: u32, max: u32 },
    /// The factor could not be evaluated and contributes nothing
    NotApplicable { max: u32 },
}

impl FactorScore {
    /// Points contributed to the total
    pub fn points(&self) -> u32 {
        match self {
            Self::Scored { points, .. } => *points,
            Self::NotApplicable { .. } => 0,
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            Self::Scored { max, .. } | Self::NotApplicable { max } => *max,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Scored { .. })
    }
}

impl fmt::Display for FactorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored { points, max } => write!(f, "{}/{}", points, max),
            Self::NotApplicable { .. } => write!(f, "N/A"),
        }
    }
}

/// Interpretation band for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    NeedsAttention,
    Fair,
    Good,
    Excellent,
}

impl HealthBand {
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::NeedsAttention
        }
    }

    /// Interpretation shown alongside the score
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! Your financial habits are strong. Keep up the great work!",
            Self::Good => "Good! You have a solid foundation. Consider optimizing spending and increasing savings.",
            Self::Fair => "Fair. There's room for improvement. Focus on reducing unnecessary expenses and setting clear budgets.",
            Self::NeedsAttention => "Needs Attention. It's time to review your finances thoroughly. Prioritize increasing income and cutting expenses.",
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::NeedsAttention => write!(f, "Needs Attention"),
        }
    }
}

/// Follow-up advice attached to a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRecommendation {
    /// Income is fully spent
    StartEmergencyFund,
    /// Budget adherence is below full marks
    RevisitBudgets,
    /// Expenses exceed income
    ImproveCashFlow,
}

impl fmt::Display for HealthRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartEmergencyFund => write!(
                f,
                "Start building an emergency fund. Even small, consistent savings make a difference."
            ),
            Self::RevisitBudgets => write!(
                f,
                "Revisit your budgets. Are they realistic? Try to stick to them to avoid overspending."
            ),
            Self::ImproveCashFlow => write!(
                f,
                "Look for ways to increase your income or significantly reduce your expenses to achieve a positive cash flow."
            ),
        }
    }
}

/// A computed health score with its per-factor breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScore {
    pub total: u32,
    pub band: HealthBand,
    pub savings_rate: FactorScore,
    pub budget_adherence: FactorScore,
    pub income_vs_expense: FactorScore,
    pub debt_management: FactorScore,
    /// The month's savings rate, when there is income
    pub savings_rate_percent: Option<f64>,
    pub summary: MonthlySummary,
    pub recommendations: Vec<HealthRecommendation>,
}

impl HealthScore {
    /// Factors in display order with their labels
    pub fn breakdown(&self) -> [(&'static str, FactorScore); 4] {
        [
            ("Savings Rate", self.savings_rate),
            ("Budget Adherence", self.budget_adherence),
            ("Income vs Expenses", self.income_vs_expense),
            ("Debt Management", self.debt_management),
        ]
    }
}

/// Result of a health computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HealthOutcome {
    /// Neither transactions nor budgets to score; a numeric score would be misleading
    NoData,
    Scored(HealthScore),
}

impl HealthOutcome {
    pub fn score(&self) -> Option<&HealthScore> {
        match self {
            Self::Scored(score) => Some(score),
            Self::NoData => None,
        }
    }
}

fn savings_rate_score(summary: &MonthlySummary) -> FactorScore {
    if !summary.income.is_positive() {
        return FactorScore::NotApplicable {
            max: SAVINGS_RATE_MAX,
        };
    }

    // rate >= p  <=>  balance * 100 >= income * p
    let balance = i128::from(summary.balance.minor()) * 100;
    let income = i128::from(summary.income.minor());
    let points = if balance >= income * 20 {
        30
    } else if balance >= income * 10 {
        20
    } else if balance > 0 {
        10
    } else {
        0
    };

    FactorScore::Scored {
        points,
        max: SAVINGS_RATE_MAX,
    }
}

fn budget_adherence_score(transactions: &[Transaction], budgets: &[Budget]) -> FactorScore {
    let budgets = Budget::latest_per_category(budgets);
    let points = if budgets.is_empty() {
        0
    } else {
        let over_count = evaluate_budgets(transactions, &budgets)
            .iter()
            .filter(|e| e.is_overspent())
            .count();

        if over_count == 0 {
            25
        } else if over_count * 2 <= budgets.len() {
            15
        } else {
            5
        }
    };

    FactorScore::Scored {
        points,
        max: BUDGET_ADHERENCE_MAX,
    }
}

fn income_vs_expense_score(summary: &MonthlySummary) -> FactorScore {
    let points = if !summary.income.is_positive() {
        0
    } else if summary.income > summary.expense {
        25
    } else if summary.income == summary.expense {
        15
    } else {
        5
    };

    FactorScore::Scored {
        points,
        max: INCOME_VS_EXPENSE_MAX,
    }
}

/// Score a month from its transactions and the budgets in force
///
/// `transactions` should already be restricted to the month being scored.
/// A month with budgets but no transactions yet is still scored.
pub fn compute_health(transactions: &[Transaction], budgets: &[Budget]) -> HealthOutcome {
    if transactions.is_empty() && budgets.is_empty() {
        tracing::debug!("no transactions or budgets, health score not computed");
        return HealthOutcome::NoData;
    }

    let summary = summarize(transactions);
    let savings_rate = savings_rate_score(&summary);
    let budget_adherence = budget_adherence_score(transactions, budgets);
    let income_vs_expense = income_vs_expense_score(&summary);
    let debt_management = FactorScore::Scored {
        points: DEBT_PLACEHOLDER_POINTS,
        max: DEBT_MANAGEMENT_MAX,
    };

    let total = savings_rate.points()
        + budget_adherence.points()
        + income_vs_expense.points()
        + debt_management.points();

    let mut recommendations = Vec::new();
    if savings_rate.is_applicable() && summary.balance.is_zero() {
        recommendations.push(HealthRecommendation::StartEmergencyFund);
    }
    if budget_adherence.points() < BUDGET_ADHERENCE_MAX {
        recommendations.push(HealthRecommendation::RevisitBudgets);
    }
    if summary.income < summary.expense {
        recommendations.push(HealthRecommendation::ImproveCashFlow);
    }

    let band = HealthBand::for_score(total);
    tracing::debug!(total, %band, "computed health score");

    HealthOutcome::Scored(HealthScore {
        total,
        band,
        savings_rate,
        budget_adherence,
        income_vs_expense,
        debt_management,
        savings_rate_percent: summary.savings_rate(),
        summary,
        recommendations,
    })
}
