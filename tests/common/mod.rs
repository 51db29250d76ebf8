#![allow(dead_code)]

use chrono::NaiveDate;
use finance_tracker::models::{Budget, Money, Transaction};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn income(on: NaiveDate, source: &str, minor: i64) -> Transaction {
    Transaction::income(on, source, source, Money::from_minor(minor)).unwrap()
}

pub fn expense(on: NaiveDate, category: &str, description: &str, minor: i64) -> Transaction {
    Transaction::expense(on, category, description, Money::from_minor(minor)).unwrap()
}

pub fn budget(category: &str, minor: i64) -> Budget {
    Budget::new(category, Money::from_minor(minor)).unwrap()
}

/// Three months of a typical household ledger, ending in March 2025
pub fn household_ledger() -> Vec<Transaction> {
    vec![
        income(date(2025, 1, 1), "Salary", 100_000),
        expense(date(2025, 1, 3), "Bills", "Rent", 40_000),
        expense(date(2025, 1, 12), "Food", "Groceries", 15_000),
        income(date(2025, 2, 1), "Salary", 100_000),
        expense(date(2025, 2, 3), "Bills", "Rent", 40_000),
        expense(date(2025, 2, 14), "Food", "Groceries", 18_000),
        expense(date(2025, 2, 20), "Entertainment", "Concert", 6_000),
        income(date(2025, 3, 1), "Salary", 100_000),
        income(date(2025, 3, 8), "Freelance", 5_000),
        expense(date(2025, 3, 3), "Bills", "Rent", 40_000),
        expense(date(2025, 3, 10), "Food", "Groceries", 21_000),
        expense(date(2025, 3, 11), "Transport", "Train pass", 3_000),
    ]
}

pub fn household_budgets() -> Vec<Budget> {
    vec![
        budget("Bills", 40_000),
        budget("Food", 25_000),
        budget("Transport", 5_000),
    ]
}
