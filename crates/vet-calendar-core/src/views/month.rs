//! Month agenda buckets.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::layout::sort_by_start;
use crate::models::ScheduledSlot;

use super::{slots_on, ViewError, ViewResult};

/// One cell of the month grid: the first few appointments of the day plus
/// how many more were cut.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthDay {
    pub date: NaiveDate,
    /// Shown entries, in start order
    pub visible: Vec<ScheduledSlot>,
    /// Entries hidden behind the "+N more" marker
    pub overflow: usize,
}

impl MonthDay {
    /// Total appointments on this date.
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow
    }
}

/// Bucket `slots` into every day of `year`-`month`, truncating each bucket
/// to `config.month_cell_limit` entries.
pub fn month_agenda(
    slots: &[ScheduledSlot],
    year: i32,
    month: u32,
    config: &LayoutConfig,
) -> ViewResult<Vec<MonthDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(ViewError::InvalidMonth { year, month })?;

    let days: Vec<MonthDay> = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| {
            let bucket = slots_on(slots, date);
            let mut visible: Vec<ScheduledSlot> =
                sort_by_start(&bucket).into_iter().cloned().collect();
            let overflow = visible.len().saturating_sub(config.month_cell_limit);
            visible.truncate(config.month_cell_limit);
            MonthDay {
                date,
                visible,
                overflow,
            }
        })
        .collect();

    debug!(
        year,
        month,
        days = days.len(),
        appointments = days.iter().map(MonthDay::total).sum::<usize>(),
        "bucketed month"
    );

    Ok(days)
}
