//! Aggregation of transactions by kind, category and month

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::filter::filter_by_period;
use crate::models::{Money, MonthPeriod, Transaction, TransactionKind};

/// Summed amount per category (or income source)
///
/// Only categories with at least one matching transaction are present.
/// Iteration order is alphabetical and carries no meaning.
pub type CategoryTotals = BTreeMap<String, Money>;

/// Income, expense and balance for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthlySummary {
    pub income: Money,
    pub expense: Money,
    /// income - expense (net cash flow)
    pub balance: Money,
}

impl MonthlySummary {
    /// Savings as a percentage of income, `None` without income
    pub fn savings_rate(&self) -> Option<f64> {
        if self.income.is_positive() {
            Some(self.balance.percent_of(self.income))
        } else {
            None
        }
    }
}

/// A category with its summed amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

/// A category with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Share of the total, 0-100
    pub percent: f64,
}

/// Sum of amounts for transactions of `kind`
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind() == kind)
        .map(|t| t.amount())
        .sum()
}

/// Sum of amounts per category for transactions of `kind`
pub fn group_sum_by_category(transactions: &[Transaction], kind: TransactionKind) -> CategoryTotals {
    let mut totals = CategoryTotals::new();

    for txn in transactions.iter().filter(|t| t.kind() == kind) {
        *totals.entry(txn.category().to_string()).or_default() += txn.amount();
    }

    totals
}

/// Income, expense and balance over `transactions`
pub fn summarize(transactions: &[Transaction]) -> MonthlySummary {
    let income = total_by_kind(transactions, TransactionKind::Income);
    let expense = total_by_kind(transactions, TransactionKind::Expense);

    MonthlySummary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Income, expense and balance for the transactions dated in `period`
pub fn monthly_summary(transactions: &[Transaction], period: MonthPeriod) -> MonthlySummary {
    let in_period: Vec<Transaction> = filter_by_period(transactions, period);
    summarize(&in_period)
}

/// Categories ordered by amount, largest first (ties by name)
pub fn ranked_categories(totals: &CategoryTotals) -> Vec<CategoryAmount> {
    let mut ranked: Vec<CategoryAmount> = totals
        .iter()
        .map(|(category, amount)| CategoryAmount {
            category: category.clone(),
            amount: *amount,
        })
        .collect();

    // BTreeMap iteration is already by name, and the sort is stable
    ranked.sort_by_key(|c| Reverse(c.amount));
    ranked
}

/// The `limit` largest categories
pub fn top_categories(totals: &CategoryTotals, limit: usize) -> Vec<CategoryAmount> {
    let mut ranked = ranked_categories(totals);
    ranked.truncate(limit);
    ranked
}

/// Each expense category's share of total spending, largest first
///
/// Empty when there is no spending.
pub fn spending_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let totals = group_sum_by_category(transactions, TransactionKind::Expense);
    let total: Money = totals.values().sum();
    if total.is_zero() {
        return Vec::new();
    }

    ranked_categories(&totals)
        .into_iter()
        .map(|c| CategoryShare {
            percent: c.amount.percent_of(total),
            category: c.category,
            amount: c.amount,
        })
        .collect()
}

/// The `limit` largest expenses, ledger order among equal amounts
pub fn top_expenses(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut expenses: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense())
        .cloned()
        .collect();

    expenses.sort_by_key(|t| Reverse(t.amount()));
    expenses.truncate(limit);
    expenses
}

/// Income and expense per month across the whole ledger
pub fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<MonthPeriod, MonthlySummary> {
    let mut months: BTreeMap<MonthPeriod, MonthlySummary> = BTreeMap::new();

    for txn in transactions {
        let entry = months.entry(txn.period()).or_default();
        match txn.kind() {
            TransactionKind::Income => {
                entry.income += txn.amount();
                entry.balance += txn.amount();
            }
            TransactionKind::Expense => {
                entry.expense += txn.amount();
                entry.balance -= txn.amount();
            }
        }
    }

    months
}

/// Average spend per elapsed day of the month containing `reference`
///
/// The month is counted up to and including `reference`.
pub fn average_daily_expense(total: Money, reference: NaiveDate) -> Money {
    total.divide_rounded(reference.day())
}
