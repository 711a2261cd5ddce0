//! Calendar layout engine.
//!
//! Pipeline for one calendar date: Overlap Detection → Column Assignment → Geometry
//!
//! ```text
//!  09:00 ┌────────┐
//!        │   A    │┌────────┐
//!  10:00 └────────┘│   B    │
//!        ┌────────┐│        │
//!  10:30 │   C    │└────────┘
//!  11:00 └────────┘
//!         column 0  column 1
//! ```
//!
//! Slots are stable-sorted by start and placed greedily in the first column
//! whose slots they do not overlap. On interval graphs this earliest-start
//! greedy colouring is optimal, so the column count equals the largest set
//! of mutually overlapping slots.

mod columns;
mod geometry;
mod overlap;

pub use columns::*;
pub use geometry::*;
pub use overlap::*;

/// Minutes on the vertical axis of day and week views.
pub const DAY_AXIS_MINUTES: u32 = 24 * 60;

/// Inset on each side of a lane, in percent of the lane area.
pub const LANE_GUTTER_PERCENT: f64 = 0.5;

/// Floor for block height so very short appointments stay clickable.
pub const MIN_HEIGHT_PERCENT: f64 = 1.0;
