//! Proportion data for bar-style distribution charts
//!
//! Rendering (colour, label padding, layout) belongs to the front end; this
//! module only decides ordering, percentages and bar lengths.

use serde::Serialize;

use super::aggregate::{ranked_categories, CategoryTotals};
use crate::models::Money;

/// Glyph used for one bar cell
pub const BAR_GLYPH: char = '█';

/// One labelled slice of a distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub amount: Money,
    /// Share of the total, 0-100
    pub percent: f64,
    /// Bar cells, `amount * width / total` rounded down
    pub bar_len: usize,
}

impl ChartSlice {
    pub fn bar(&self) -> String {
        std::iter::repeat(BAR_GLYPH).take(self.bar_len).collect()
    }
}

/// Slices for `totals`, largest first, scaled so a 100% slice spans `width`
///
/// Empty when there are no totals or they sum to zero.
pub fn distribution(totals: &CategoryTotals, width: usize) -> Vec<ChartSlice> {
    let total: Money = totals.values().sum();
    if total.is_zero() {
        return Vec::new();
    }

    let total_minor = i128::from(total.minor());
    ranked_categories(totals)
        .into_iter()
        .map(|c| {
            let cells = i128::from(c.amount.minor()) * width as i128 / total_minor;
            ChartSlice {
                percent: c.amount.percent_of(total),
                bar_len: usize::try_from(cells).unwrap_or(0),
                label: c.category,
                amount: c.amount,
            }
        })
        .collect()
}
