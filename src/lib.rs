//! Finance Tracker - aggregation and derived-metrics engine
//!
//! This library computes everything a personal finance tracker shows about a
//! ledger of income and expense records: period totals, category breakdowns,
//! month-over-month trends, income stability, budget utilization, a weighted
//! financial health score, and rule-based alerts and recommendations.
//!
//! All money is held in integer minor units. Every computation is a pure
//! function over in-memory transactions and budgets; loading a ledger and
//! presenting results belong to the host application.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup for host applications
//! - `models`: Money, month periods, transactions and budgets
//! - `services`: Filters, aggregates, trends, budgets, health and alerts
//! - `reports`: Spending, income and savings analyses, monthly report, daily check
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{Settings, TrackerPaths};
//! use finance_tracker::reports::MonthlyReport;
//! use finance_tracker::services::PeriodService;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let report = MonthlyReport::generate(&settings, &transactions, &budgets, PeriodService::today());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{FinanceError, FinanceResult};
