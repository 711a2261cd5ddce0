//! Week view layout.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::models::ScheduledSlot;

use super::{layout_day, DayLayout, ViewError, ViewResult};

/// Seven independently laid out days.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub days: Vec<DayLayout>,
}

impl WeekLayout {
    /// First date of the week.
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    /// Widest day, useful for sizing a shared header.
    pub fn max_column_count(&self) -> usize {
        self.days
            .iter()
            .map(DayLayout::column_count)
            .max()
            .unwrap_or(1)
    }
}

/// The seven dates of the week containing `anchor`.
pub fn week_dates(anchor: NaiveDate, week_starts_on: Weekday) -> ViewResult<[NaiveDate; 7]> {
    let offset = (7 + anchor.weekday().num_days_from_monday()
        - week_starts_on.num_days_from_monday())
        % 7;
    let start = anchor
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or(ViewError::DateOutOfRange(anchor))?;

    let mut dates = [start; 7];
    for (i, date) in dates.iter_mut().enumerate().skip(1) {
        *date = start
            .checked_add_days(Days::new(i as u64))
            .ok_or(ViewError::DateOutOfRange(start))?;
    }
    Ok(dates)
}

/// Lay out every day of the week containing `anchor`. Columns are computed
/// per date, so a busy Tuesday does not narrow Monday's blocks.
pub fn layout_week(
    slots: &[ScheduledSlot],
    anchor: NaiveDate,
    config: &LayoutConfig,
) -> ViewResult<WeekLayout> {
    let dates = week_dates(anchor, config.week_starts_on)?;
    let days: Vec<DayLayout> = dates
        .iter()
        .map(|&date| layout_day(slots, date, config))
        .collect();

    debug!(week_start = %dates[0], slot_count = slots.len(), "laid out week");

    Ok(WeekLayout { days })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nine_to_ten(id: &str, date: NaiveDate) -> ScheduledSlot {
        ScheduledSlot::new(
            id,
            date.and_hms_opt(9, 0, 0).unwrap(),
            date.and_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_week_dates_monday_start() {
        // 2024-03-14 is a Thursday.
        let dates = week_dates(ymd(2024, 3, 14), Weekday::Mon).unwrap();
        assert_eq!(dates[0], ymd(2024, 3, 11));
        assert_eq!(dates[6], ymd(2024, 3, 17));
    }

    #[test]
    fn test_week_dates_sunday_start() {
        let dates = week_dates(ymd(2024, 3, 14), Weekday::Sun).unwrap();
        assert_eq!(dates[0], ymd(2024, 3, 10));
        assert_eq!(dates[6], ymd(2024, 3, 16));
    }

    #[test]
    fn test_anchor_on_week_start() {
        let dates = week_dates(ymd(2024, 3, 11), Weekday::Mon).unwrap();
        assert_eq!(dates[0], ymd(2024, 3, 11));
    }

    #[test]
    fn test_week_crosses_month_boundary() {
        let dates = week_dates(ymd(2024, 3, 1), Weekday::Mon).unwrap();
        assert_eq!(dates[0], ymd(2024, 2, 26));
        assert_eq!(dates[4], ymd(2024, 3, 1));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            week_dates(NaiveDate::MAX, NaiveDate::MAX.weekday()),
            Err(ViewError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_columns_computed_per_day() {
        let mon = ymd(2024, 3, 11);
        let tue = ymd(2024, 3, 12);
        let slots = vec![
            nine_to_ten("mon", mon),
            nine_to_ten("tue-1", tue),
            nine_to_ten("tue-2", tue),
        ];
        let week = layout_week(&slots, mon, &LayoutConfig::default()).unwrap();

        assert_eq!(week.days.len(), 7);
        assert_eq!(week.start(), Some(mon));
        assert_eq!(week.days[0].column_count(), 1);
        assert_eq!(week.days[1].column_count(), 2);
        assert_eq!(week.max_column_count(), 2);
        assert!(week.days[2..].iter().all(DayLayout::is_empty));
    }
}
