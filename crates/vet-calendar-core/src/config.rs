//! Layout configuration.
//!
//! Every field has a default, so a host application can ship a partial JSON
//! document (or none at all) and only override what it needs.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{DAY_AXIS_MINUTES, LANE_GUTTER_PERCENT, MIN_HEIGHT_PERCENT};

/// Appointments shown per month-view cell before the "+N more" marker.
pub const MONTH_CELL_LIMIT: usize = 3;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for day/week geometry and month bucketing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Length of the vertical time axis in minutes
    pub axis_minutes: u32,
    /// Inset applied to both sides of every lane
    pub gutter_percent: f64,
    /// Smallest height a block is drawn with
    pub min_height_percent: f64,
    /// Appointments listed per month cell
    pub month_cell_limit: usize,
    /// First day of the week view
    pub week_starts_on: Weekday,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            axis_minutes: DAY_AXIS_MINUTES,
            gutter_percent: LANE_GUTTER_PERCENT,
            min_height_percent: MIN_HEIGHT_PERCENT,
            month_cell_limit: MONTH_CELL_LIMIT,
            week_starts_on: Weekday::Mon,
        }
    }
}

impl LayoutConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the projection meaningless.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.axis_minutes == 0 {
            return Err(ConfigError::Invalid {
                field: "axis_minutes",
                reason: "must be greater than zero".into(),
            });
        }
        check_percent("gutter_percent", self.gutter_percent)?;
        check_percent("min_height_percent", self.min_height_percent)?;
        Ok(())
    }

    pub fn with_axis_minutes(mut self, axis_minutes: u32) -> Self {
        self.axis_minutes = axis_minutes;
        self
    }

    pub fn with_gutter_percent(mut self, gutter_percent: f64) -> Self {
        self.gutter_percent = gutter_percent;
        self
    }

    pub fn with_min_height_percent(mut self, min_height_percent: f64) -> Self {
        self.min_height_percent = min_height_percent;
        self
    }

    pub fn with_month_cell_limit(mut self, month_cell_limit: usize) -> Self {
        self.month_cell_limit = month_cell_limit;
        self
    }

    pub fn with_week_starts_on(mut self, week_starts_on: Weekday) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }
}

fn check_percent(field: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite non-negative percentage, got {}", value),
        });
    }
    Ok(())
}
