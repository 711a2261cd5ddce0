//! Greedy column (lane) assignment.

use tracing::debug;

use crate::models::{ColumnAssignment, ScheduledSlot};

use super::overlap::overlaps;

/// Stable sort by start time; equal starts keep their input order.
pub fn sort_by_start(slots: &[ScheduledSlot]) -> Vec<&ScheduledSlot> {
    let mut sorted: Vec<&ScheduledSlot> = slots.iter().collect();
    sorted.sort_by_key(|slot| slot.start);
    sorted
}

/// Assign every slot of one calendar date to a display column.
///
/// Each slot goes to the lowest-indexed column holding nothing it overlaps,
/// opening a new column when every existing one conflicts. Callers bucket
/// by date first; the engine does not look at dates.
pub fn assign_columns(slots: &[ScheduledSlot]) -> ColumnAssignment {
    let sorted = sort_by_start(slots);

    // Never more columns than slots.
    let mut columns: Vec<Vec<&ScheduledSlot>> = Vec::with_capacity(sorted.len());
    let mut assignment = ColumnAssignment::with_capacity(sorted.len());

    for slot in sorted {
        let free = columns
            .iter()
            .position(|column| column.iter().all(|placed| !overlaps(placed, slot)));

        let index = match free {
            Some(index) => {
                columns[index].push(slot);
                index
            }
            None => {
                columns.push(vec![slot]);
                columns.len() - 1
            }
        };

        assignment.insert(slot.id.clone(), index);
    }

    debug!(
        slot_count = slots.len(),
        column_count = assignment.column_count(),
        "assigned columns"
    );

    assignment
}
