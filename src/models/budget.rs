//! Budget model
//!
//! A budget is a monthly spending limit for one category. It applies to every
//! calendar month; there is no per-period allocation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::money::Money;
use crate::error::{FinanceError, FinanceResult};

/// A monthly spending limit for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord", into = "BudgetRecord")]
pub struct Budget {
    category: String,
    amount: Money,
}

impl Budget {
    /// Create a budget, rejecting negative amounts
    pub fn new(category: impl Into<String>, amount: Money) -> FinanceResult<Self> {
        let category = category.into();
        if amount.is_negative() {
            tracing::warn!(%category, amount = amount.minor(), "rejected budget with negative amount");
            return Err(FinanceError::negative_budget(amount.minor()));
        }

        Ok(Self { category, amount })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Collapse duplicate categories, keeping the last definition of each
    ///
    /// The position of a category is that of its first occurrence.
    pub fn latest_per_category(budgets: &[Budget]) -> Vec<Budget> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut unique: Vec<Budget> = Vec::with_capacity(budgets.len());

        for budget in budgets {
            match index.get(budget.category()) {
                Some(&slot) => {
                    tracing::warn!(
                        category = budget.category(),
                        "duplicate budget definition, keeping the latest"
                    );
                    unique[slot] = budget.clone();
                }
                None => {
                    index.insert(budget.category(), unique.len());
                    unique.push(budget.clone());
                }
            }
        }

        unique
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Unvalidated wire shape of a budget
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetRecord {
    category: String,
    amount: Money,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = FinanceError;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        Self::new(record.category, record.amount)
    }
}

impl From<Budget> for BudgetRecord {
    fn from(budget: Budget) -> Self {
        Self {
            category: budget.category,
            amount: budget.amount,
        }
    }
}
