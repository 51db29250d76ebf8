//! Transaction model
//!
//! A ledger entry is either an expense or an income. The stored amount is
//! never negative; direction is carried by the kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::period::MonthPeriod;
use crate::error::{FinanceError, FinanceResult};

/// Date format used by ledger records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FinanceError;

    /// Case-insensitive; the ledger has held both "expense" and "Expense"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(FinanceError::InvalidKind(s.to_string())),
        }
    }
}

/// A single ledger entry
///
/// Construction validates the record, and deserialization goes through the
/// same checks, so a `Transaction` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    date: NaiveDate,
    kind: TransactionKind,
    category: String,
    description: String,
    amount: Money,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// `category` is the expense category for expenses and the income source
    /// for incomes.
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> FinanceResult<Self> {
        if amount.is_negative() {
            tracing::warn!(%date, amount = amount.minor(), "rejected transaction with negative amount");
            return Err(FinanceError::negative_transaction(amount.minor()));
        }

        Ok(Self {
            date,
            kind,
            category: category.into(),
            description: description.into(),
            amount,
        })
    }

    /// Create an expense
    pub fn expense(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> FinanceResult<Self> {
        Self::new(date, TransactionKind::Expense, category, description, amount)
    }

    /// Create an income
    pub fn income(
        date: NaiveDate,
        source: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> FinanceResult<Self> {
        Self::new(date, TransactionKind::Income, source, description, amount)
    }

    /// Build a transaction from untyped ledger fields
    pub fn from_fields(
        date: &str,
        kind: &str,
        category: &str,
        description: &str,
        amount_minor: i64,
    ) -> FinanceResult<Self> {
        let date = parse_date(date)?;
        let kind = kind.parse()?;
        Self::new(
            date,
            kind,
            category,
            description,
            Money::from_minor(amount_minor),
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Expense category or income source
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// The month this transaction falls in
    pub fn period(&self) -> MonthPeriod {
        MonthPeriod::of(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) {}",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Parse a ledger date ("YYYY-MM-DD")
pub fn parse_date(s: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| FinanceError::InvalidDate(s.to_string()))
}

/// Unvalidated wire shape of a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRecord {
    date: NaiveDate,
    kind: TransactionKind,
    category: String,
    #[serde(default)]
    description: String,
    amount: Money,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = FinanceError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.date,
            record.kind,
            record.category,
            record.description,
            record.amount,
        )
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(txn: Transaction) -> Self {
        Self {
            date: txn.date,
            kind: txn.kind,
            category: txn.category,
            description: txn.description,
            amount: txn.amount,
        }
    }
}
