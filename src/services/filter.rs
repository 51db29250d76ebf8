//! Period filters over the transaction ledger

use chrono::NaiveDate;

use crate::error::FinanceResult;
use crate::models::{MonthPeriod, Transaction, TransactionKind};

/// Transactions dated in the given calendar year and month
///
/// # Errors
///
/// Returns `FinanceError::InvalidMonth` if `month` is outside 1..=12.
pub fn filter_by_month(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> FinanceResult<Vec<Transaction>> {
    let period = MonthPeriod::new(year, month)?;
    Ok(filter_by_period(transactions, period))
}

/// Transactions dated within `period`
pub fn filter_by_period(transactions: &[Transaction], period: MonthPeriod) -> Vec<Transaction> {
    let selected: Vec<Transaction> = transactions
        .iter()
        .filter(|t| period.contains(t.date()))
        .cloned()
        .collect();

    tracing::trace!(
        %period,
        selected = selected.len(),
        total = transactions.len(),
        "filtered ledger by month"
    );
    selected
}

/// Transactions dated exactly on `date`
pub fn filter_by_date(transactions: &[Transaction], date: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date() == date)
        .cloned()
        .collect()
}

/// Transactions of the given kind
pub fn filter_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.kind() == kind)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::models::Money;

    fn txn(y: i32, m: u32, d: u32, kind: TransactionKind) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
            "Other",
            "",
            Money::from_minor(100),
        )
        .unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            txn(2024, 12, 31, TransactionKind::Expense),
            txn(2025, 1, 1, TransactionKind::Income),
            txn(2025, 1, 31, TransactionKind::Expense),
            txn(2025, 2, 1, TransactionKind::Expense),
            txn(2026, 1, 15, TransactionKind::Expense),
        ]
    }

    #[test]
    fn test_filter_by_month() {
        let january = filter_by_month(&ledger(), 2025, 1).unwrap();
        assert_eq!(january.len(), 2);
        assert!(january.iter().all(|t| t.date().format("%Y-%m").to_string() == "2025-01"));
    }

    #[test]
    fn test_filter_by_month_matches_year() {
        let january_2026 = filter_by_month(&ledger(), 2026, 1).unwrap();
        assert_eq!(january_2026.len(), 1);
    }

    #[test]
    fn test_filter_by_month_invalid_month() {
        assert!(matches!(
            filter_by_month(&ledger(), 2025, 13),
            Err(FinanceError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_filter_empty_ledger() {
        assert!(filter_by_month(&[], 2025, 1).unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_date_and_kind() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(filter_by_date(&ledger(), day).len(), 1);
        assert_eq!(filter_by_kind(&ledger(), TransactionKind::Income).len(), 1);
        assert_eq!(filter_by_kind(&ledger(), TransactionKind::Expense).len(), 4);
    }
}
