//! Layout export for rendering layers that cannot link the crate directly.

use serde::{Deserialize, Serialize};

use crate::models::AppointmentId;
use crate::views::{DayLayout, PlacedAppointment, WeekLayout};

const CSV_HEADER: &str =
    "date,id,start,end,column,column_count,top_percent,height_percent,left_percent,right_percent\n";

/// Serialized form of one day layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLayoutExport {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Lanes needed for the date
    pub column_count: usize,
    /// Placed blocks in start order
    pub entries: Vec<PlacementExport>,
}

/// Serialized form of one placed block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementExport {
    pub id: AppointmentId,
    /// Local start (ISO-8601, no offset)
    pub start: String,
    /// Local end (ISO-8601, no offset)
    pub end: String,
    pub column: usize,
    pub top_percent: f64,
    pub height_percent: f64,
    pub left_percent: f64,
    pub right_percent: f64,
}

impl From<&PlacedAppointment> for PlacementExport {
    fn from(entry: &PlacedAppointment) -> Self {
        Self {
            id: entry.id.clone(),
            start: entry.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: entry.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            column: entry.column,
            top_percent: entry.geometry.top_percent,
            height_percent: entry.geometry.height_percent,
            left_percent: entry.geometry.left_percent,
            right_percent: entry.geometry.right_percent,
        }
    }
}

impl DayLayoutExport {
    /// Create an export from a computed day layout.
    pub fn from_layout(layout: &DayLayout) -> Self {
        Self {
            date: layout.date.format("%Y-%m-%d").to_string(),
            column_count: layout.column_count(),
            entries: layout.entries.iter().map(PlacementExport::from).collect(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        self.push_csv_rows(&mut csv);
        csv
    }

    fn push_csv_rows(&self, csv: &mut String) {
        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                escape_csv(&self.date),
                escape_csv(&entry.id.to_string()),
                escape_csv(&entry.start),
                escape_csv(&entry.end),
                entry.column,
                self.column_count,
                entry.top_percent,
                entry.height_percent,
                entry.left_percent,
                entry.right_percent,
            ));
        }
    }
}

/// Serialized form of a week layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekLayoutExport {
    /// Export timestamp
    pub exported_at: String,
    /// First date of the week (YYYY-MM-DD)
    pub week_start: Option<String>,
    /// Day exports, in date order
    pub days: Vec<DayLayoutExport>,
    /// Total placed blocks across the week
    pub total_entries: usize,
}

impl WeekLayoutExport {
    /// Create an export from a computed week layout.
    pub fn from_layout(layout: &WeekLayout) -> Self {
        let days: Vec<DayLayoutExport> = layout
            .days
            .iter()
            .map(DayLayoutExport::from_layout)
            .collect();
        let total_entries = days.iter().map(|day| day.entries.len()).sum();

        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            week_start: layout.start().map(|date| date.format("%Y-%m-%d").to_string()),
            days,
            total_entries,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format, one row per placed block across all days.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        for day in &self.days {
            day.push_csv_rows(&mut csv);
        }
        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
