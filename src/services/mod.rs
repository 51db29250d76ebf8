//! Service layer for the finance tracker
//!
//! Pure computations over already-loaded transactions and budgets. Nothing in
//! this layer performs I/O or retains its inputs.

pub mod advisor;
pub mod aggregate;
pub mod budget;
pub mod chart;
pub mod filter;
pub mod health;
pub mod period;
pub mod stability;
pub mod trend;

pub use advisor::{AdvisorService, Alert, AlertKind, AlertSeverity, Recommendation, RecommendationKind};
pub use aggregate::{CategoryAmount, CategoryShare, CategoryTotals, MonthlySummary};
pub use budget::{BudgetEvaluation, BudgetOverview, OverallAdvice, UtilizationStatus};
pub use chart::ChartSlice;
pub use health::{compute_health, FactorScore, HealthBand, HealthOutcome, HealthRecommendation, HealthScore};
pub use period::PeriodService;
pub use stability::{classify_stability, Stability};
pub use trend::{classify_direction, compare_periods, PeriodChange, TrendDirection};
