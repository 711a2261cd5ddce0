//! Layout output models.

use std::collections::hash_map;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::appointment::AppointmentId;

/// Column (lane) index per appointment for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAssignment {
    columns: HashMap<AppointmentId, usize>,
}

impl ColumnAssignment {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: HashMap::with_capacity(capacity),
        }
    }

    /// Record a placement. A repeated id keeps the latest column.
    pub(crate) fn insert(&mut self, id: AppointmentId, column: usize) {
        self.columns.insert(id, column);
    }

    /// Column assigned to an appointment, if it was part of the input.
    pub fn column_of(&self, id: &AppointmentId) -> Option<usize> {
        self.columns.get(id).copied()
    }

    /// Number of lanes needed to draw the date: highest index + 1, and 1 for
    /// an empty date so lane widths never divide by zero.
    pub fn column_count(&self) -> usize {
        self.columns.values().max().map_or(1, |max| max + 1)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, AppointmentId, usize> {
        self.columns.iter()
    }
}

/// Percentage geometry of one calendar block inside a day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Offset from the top of the day axis
    pub top_percent: f64,
    /// Block height, never below the configured floor
    pub height_percent: f64,
    /// Inset from the left edge of the lane area
    pub left_percent: f64,
    /// Inset from the right edge of the lane area
    pub right_percent: f64,
}

impl Geometry {
    /// Horizontal extent left after both insets.
    pub fn width_percent(&self) -> f64 {
        100.0 - self.left_percent - self.right_percent
    }
}
