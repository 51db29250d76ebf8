//! Core data models for the finance tracker
//!
//! This module contains the ledger value types (transactions and budgets)
//! together with the money and month-period primitives they are built from.

pub mod budget;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use money::{from_minor_units, to_minor_units, Money};
pub use period::MonthPeriod;
pub use transaction::{parse_date, Transaction, TransactionKind};
