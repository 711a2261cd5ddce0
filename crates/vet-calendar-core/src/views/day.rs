//! Day view layout.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::layout::{assign_columns, project_with, sort_by_start};
use crate::models::{AppointmentId, ColumnAssignment, Geometry, ScheduledSlot};

use super::slots_on;

/// An appointment block positioned inside a day column.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAppointment {
    pub id: AppointmentId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub column: usize,
    pub geometry: Geometry,
}

/// Everything a renderer needs to draw one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub assignment: ColumnAssignment,
    /// Placed blocks in start order
    pub entries: Vec<PlacedAppointment>,
}

impl DayLayout {
    pub fn column_count(&self) -> usize {
        self.assignment.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the block for an appointment.
    pub fn entry(&self, id: &AppointmentId) -> Option<&PlacedAppointment> {
        self.entries.iter().find(|entry| &entry.id == id)
    }
}

/// Bucket `slots` to `date`, assign columns and project geometry.
pub fn layout_day(slots: &[ScheduledSlot], date: NaiveDate, config: &LayoutConfig) -> DayLayout {
    let day_slots = slots_on(slots, date);
    let assignment = assign_columns(&day_slots);
    let column_count = assignment.column_count();

    let entries = sort_by_start(&day_slots)
        .into_iter()
        .filter_map(|slot| {
            // Duplicate ids resolve to the last placement; every copy is drawn there.
            let column = assignment.column_of(&slot.id)?;
            Some(PlacedAppointment {
                id: slot.id.clone(),
                start: slot.start,
                end: slot.end,
                column,
                geometry: project_with(slot, column, column_count, config),
            })
        })
        .collect::<Vec<_>>();

    debug!(
        %date,
        appointments = entries.len(),
        column_count,
        "laid out day"
    );

    DayLayout {
        date,
        assignment,
        entries,
    }
}
