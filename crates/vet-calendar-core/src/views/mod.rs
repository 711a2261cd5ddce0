//! Calendar views: date bucketing for day, week and month grids.
//!
//! Day and week views run the layout engine once per date. The month view
//! only buckets and truncates; it has no lanes or geometry.

mod day;
mod month;
mod week;

pub use day::*;
pub use month::*;
pub use week::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ScheduledSlot;

/// View errors.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Date out of supported range near {0}")]
    DateOutOfRange(NaiveDate),
}

pub type ViewResult<T> = Result<T, ViewError>;

/// Slots whose start falls on `date`, in input order.
pub fn slots_on(slots: &[ScheduledSlot], date: NaiveDate) -> Vec<ScheduledSlot> {
    slots
        .iter()
        .filter(|slot| slot.date() == date)
        .cloned()
        .collect()
}
