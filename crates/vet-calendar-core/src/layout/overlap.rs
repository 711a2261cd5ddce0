//! Interval overlap detection.

use crate::models::{AppointmentId, ScheduledSlot};

/// Half-open `[start, end)` intersection test.
///
/// Back-to-back slots (one ends exactly when the other starts) do not
/// overlap. Zero-width slots never overlap each other or anything they only
/// touch, but one strictly inside another slot does overlap it. Inverted
/// slots are not rejected and follow the same rule: they overlap only a slot
/// that spans their whole `[end, start]` range.
pub fn overlaps(a: &ScheduledSlot, b: &ScheduledSlot) -> bool {
    a.start < b.end && b.start < a.end
}

/// All overlapping pairs, each reported once in input order.
pub fn overlapping_pairs(slots: &[ScheduledSlot]) -> Vec<(AppointmentId, AppointmentId)> {
    let mut pairs = Vec::new();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if overlaps(a, b) {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    pairs
}
