//! Time-geometry projection for day and week grids.

use chrono::Timelike;

use crate::config::LayoutConfig;
use crate::models::{Geometry, ScheduledSlot};

/// Project a slot onto an `axis_minutes` tall grid with the default gutter
/// and height floor.
pub fn project(
    slot: &ScheduledSlot,
    column: usize,
    column_count: usize,
    axis_minutes: u32,
) -> Geometry {
    let config = LayoutConfig::default().with_axis_minutes(axis_minutes);
    project_with(slot, column, column_count, &config)
}

/// Project a slot using every tunable from `config`.
///
/// Vertical position comes from the start's hour and minute only; the
/// height uses the full duration and is floored at
/// `config.min_height_percent`. Nothing else is clamped, so a slot that
/// starts outside the axis lands off-grid.
pub fn project_with(
    slot: &ScheduledSlot,
    column: usize,
    column_count: usize,
    config: &LayoutConfig,
) -> Geometry {
    let axis = f64::from(config.axis_minutes);

    let start_minutes = f64::from(slot.start.hour() * 60 + slot.start.minute());
    let top_percent = 100.0 * start_minutes / axis;

    let duration_minutes = slot.duration().num_milliseconds() as f64 / 60_000.0;
    let height_percent = (100.0 * duration_minutes / axis).max(config.min_height_percent);

    let column_width = 100.0 / column_count.max(1) as f64;
    let left_percent = column as f64 * column_width + config.gutter_percent;
    let right_percent = 100.0 - (column + 1) as f64 * column_width + config.gutter_percent;

    Geometry {
        top_percent,
        height_percent,
        left_percent,
        right_percent,
    }
}
