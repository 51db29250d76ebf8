//! Month period service
//!
//! Resolves the months an analysis looks at relative to a reference date,
//! honouring the configured month stepping.

use crate::config::settings::{MonthWindow, Settings};
use crate::models::MonthPeriod;
use chrono::{Duration, Local, NaiveDate};

/// Days stepped back per month when using 30-day offsets
const OFFSET_DAYS: i64 = 30;

/// Service for month window resolution
pub struct PeriodService<'a> {
    settings: &'a Settings,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Today's date in local time
    ///
    /// The only clock read in the crate; every computation takes a reference
    /// date so callers can pass this or a fixed date.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// The month containing `reference`
    pub fn current_month(&self, reference: NaiveDate) -> MonthPeriod {
        MonthPeriod::of(reference)
    }

    /// The calendar month before the one containing `reference`
    pub fn previous_month(&self, reference: NaiveDate) -> MonthPeriod {
        MonthPeriod::of(reference).prev()
    }

    /// The `count` months ending with the one containing `reference`, oldest first
    pub fn trailing_months(&self, reference: NaiveDate, count: usize) -> Vec<MonthPeriod> {
        let current = MonthPeriod::of(reference);

        let mut months: Vec<MonthPeriod> = match self.settings.month_window {
            MonthWindow::Calendar => std::iter::successors(Some(current), |p| Some(p.prev()))
                .take(count)
                .collect(),
            MonthWindow::ThirtyDayOffsets => {
                let anchor = current.first_day();
                (0..count)
                    .map(|i| {
                        let back = Duration::days(OFFSET_DAYS * i as i64);
                        let date = anchor.checked_sub_signed(back).unwrap_or(NaiveDate::MIN);
                        MonthPeriod::of(date)
                    })
                    .collect()
            }
        };

        months.reverse();
        months
    }
}
