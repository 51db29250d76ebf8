//! Daily financial check
//!
//! Today's spending against the daily share of the monthly budget, the
//! month's alerts, and a tip of the day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::Settings;
use crate::models::{Budget, Money, MonthPeriod, Transaction, TransactionKind};
use crate::services::advisor::{AdvisorService, Alert};
use crate::services::aggregate::total_by_kind;
use crate::services::budget::daily_budget;
use crate::services::filter::{filter_by_date, filter_by_period};

const TIPS: [&str; 6] = [
    "Review your subscriptions. Any you can cancel?",
    "Try the '50/30/20 rule': 50% needs, 30% wants, 20% savings.",
    "Automate your savings. Even a small amount adds up!",
    "Before a large purchase, wait 24 hours to avoid impulse buying.",
    "Check for discounts or coupons before you shop.",
    "Consider packing lunch for a week to see how much you save.",
];

/// The tip shown on `date`; the same date always yields the same tip
pub fn tip_for(date: NaiveDate) -> &'static str {
    TIPS[date.ordinal0() as usize % TIPS.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCheck {
    pub date: NaiveDate,
    pub spent_today: Money,
    /// Monthly budget spread over the days of the month, `None` without budgets
    pub daily_budget: Option<Money>,
    /// Daily budget minus today's spending, negative when over
    pub remaining: Option<Money>,
    pub alerts: Vec<Alert>,
    pub tip: &'static str,
}

impl DailyCheck {
    pub fn generate(
        settings: &Settings,
        transactions: &[Transaction],
        budgets: &[Budget],
        date: NaiveDate,
    ) -> Self {
        let period = MonthPeriod::of(date);
        let spent_today = total_by_kind(&filter_by_date(transactions, date), TransactionKind::Expense);

        let daily_budget = daily_budget(budgets, period);
        let remaining = daily_budget.map(|budget| budget - spent_today);

        let month = filter_by_period(transactions, period);
        let alerts = AdvisorService::new(settings).alerts(&month, budgets);

        Self {
            date,
            spent_today,
            daily_budget,
            remaining,
            alerts,
            tip: tip_for(date),
        }
    }

    /// Whether today's spending fits the daily budget
    pub fn within_budget(&self) -> Option<bool> {
        self.remaining.map(|r| !r.is_negative())
    }
}
