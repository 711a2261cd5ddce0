//! Vet-Calendar Core Library
//!
//! Appointment calendar layout engine for veterinary practice scheduling.
//!
//! # Architecture
//!
//! ```text
//! Appointments (practice app) → Filter (organization / type / status)
//!                                        │
//!                         ┌──────────────┼──────────────┐
//!                         ▼              ▼              ▼
//!                     Day view       Week view      Month view
//!                    (one date)    (seven dates)   (bucket + truncate)
//!                         │              │
//!                         └──────┬───────┘
//!                                ▼  per date
//!                ┌───────────────────────────────────┐
//!                │  stable sort by start             │
//!                │  greedy column assignment         │
//!                │  geometry projection (percent)    │
//!                └───────────────┬───────────────────┘
//!                                ▼
//!                     Renderer (web / iOS / JSON)
//! ```
//!
//! # Core Principle
//!
//! **Overlaps are shown, never rejected.** Concurrent appointments are drawn
//! side by side; the engine performs no conflict prevention.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, ScheduledSlot, ColumnAssignment, Geometry)
//! - [`layout`]: Overlap predicate, column assignment and geometry projection
//! - [`filter`]: Organization / type / status filters
//! - [`views`]: Day, week and month bucketing
//! - [`config`]: Layout configuration
//! - [`export`]: JSON and CSV export of computed layouts
//! - [`telemetry`]: Optional tracing subscriber setup

pub mod config;
pub mod export;
pub mod filter;
pub mod layout;
pub mod models;
pub mod telemetry;
pub mod views;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use filter::AppointmentFilter;
pub use layout::{assign_columns, overlaps, project, project_with};
pub use models::{
    Appointment, AppointmentId, AppointmentStatus, AppointmentType, ColumnAssignment, Geometry,
    ScheduledSlot,
};
pub use views::{layout_day, layout_week, month_agenda, DayLayout, MonthDay, WeekLayout};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetCalendarError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<config::ConfigError> for VetCalendarError {
    fn from(e: config::ConfigError) -> Self {
        VetCalendarError::InvalidConfig(e.to_string())
    }
}

impl From<views::ViewError> for VetCalendarError {
    fn from(e: views::ViewError) -> Self {
        VetCalendarError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for VetCalendarError {
    fn from(e: serde_json::Error) -> Self {
        VetCalendarError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for VetCalendarError {
    fn from(e: chrono::ParseError) -> Self {
        VetCalendarError::InvalidInput(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a layout engine with the default configuration.
#[uniffi::export]
pub fn new_layout_engine() -> Arc<CalendarLayoutEngine> {
    Arc::new(CalendarLayoutEngine {
        config: LayoutConfig::default(),
    })
}

/// Create a layout engine from a (possibly partial) JSON configuration.
#[uniffi::export]
pub fn layout_engine_from_json(
    json: String,
) -> Result<Arc<CalendarLayoutEngine>, VetCalendarError> {
    let config = LayoutConfig::from_json(&json)?;
    Ok(Arc::new(CalendarLayoutEngine { config }))
}

/// Half-open overlap test for two appointments.
#[uniffi::export]
pub fn appointments_overlap(
    a: FfiAppointment,
    b: FfiAppointment,
) -> Result<bool, VetCalendarError> {
    let a = Appointment::try_from(a)?;
    let b = Appointment::try_from(b)?;
    Ok(overlaps(&a.slot(), &b.slot()))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Layout engine handle. Holds only immutable configuration, so it can be
/// shared across threads without locking.
#[derive(uniffi::Object)]
pub struct CalendarLayoutEngine {
    config: LayoutConfig,
}

#[uniffi::export]
impl CalendarLayoutEngine {
    // =========================================================================
    // Views
    // =========================================================================

    /// Lay out one date (`YYYY-MM-DD`).
    pub fn layout_day(
        &self,
        appointments: Vec<FfiAppointment>,
        date: String,
        filter: Option<FfiFilter>,
    ) -> Result<FfiDayLayout, VetCalendarError> {
        let slots = filtered_slots(appointments, filter)?;
        let date = parse_date(&date)?;
        let layout = layout_day(&slots, date, &self.config);
        Ok(FfiDayLayout::from(&layout))
    }

    /// Lay out the week containing `anchor_date`.
    pub fn layout_week(
        &self,
        appointments: Vec<FfiAppointment>,
        anchor_date: String,
        filter: Option<FfiFilter>,
    ) -> Result<FfiWeekLayout, VetCalendarError> {
        let slots = filtered_slots(appointments, filter)?;
        let anchor = parse_date(&anchor_date)?;
        let week = layout_week(&slots, anchor, &self.config)?;
        Ok(FfiWeekLayout {
            days: week.days.iter().map(FfiDayLayout::from).collect(),
        })
    }

    /// Bucket a month into truncated day cells.
    pub fn month_agenda(
        &self,
        appointments: Vec<FfiAppointment>,
        year: i32,
        month: u32,
        filter: Option<FfiFilter>,
    ) -> Result<Vec<FfiMonthDay>, VetCalendarError> {
        let slots = filtered_slots(appointments, filter)?;
        let days = month_agenda(&slots, year, month, &self.config)?;
        Ok(days.into_iter().map(|day| day.into()).collect())
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Lay out one date and export it as JSON.
    pub fn export_day_json(
        &self,
        appointments: Vec<FfiAppointment>,
        date: String,
        filter: Option<FfiFilter>,
    ) -> Result<String, VetCalendarError> {
        let slots = filtered_slots(appointments, filter)?;
        let date = parse_date(&date)?;
        let layout = layout_day(&slots, date, &self.config);
        Ok(export::DayLayoutExport::from_layout(&layout).to_json()?)
    }

    /// Lay out a week and export it as CSV.
    pub fn export_week_csv(
        &self,
        appointments: Vec<FfiAppointment>,
        anchor_date: String,
        filter: Option<FfiFilter>,
    ) -> Result<String, VetCalendarError> {
        let slots = filtered_slots(appointments, filter)?;
        let anchor = parse_date(&anchor_date)?;
        let week = layout_week(&slots, anchor, &self.config)?;
        Ok(export::WeekLayoutExport::from_layout(&week).to_csv())
    }

    /// Current configuration as JSON.
    pub fn config_json(&self) -> Result<String, VetCalendarError> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

// =========================================================================
// Input Conversion
// =========================================================================

fn filtered_slots(
    appointments: Vec<FfiAppointment>,
    filter: Option<FfiFilter>,
) -> Result<Vec<ScheduledSlot>, VetCalendarError> {
    let appointments = appointments
        .into_iter()
        .map(Appointment::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let filter = filter.map(AppointmentFilter::from).unwrap_or_default();
    Ok(filter.apply(&appointments))
}

/// Parse a local wall-clock timestamp, with or without seconds.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, VetCalendarError> {
    value
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| VetCalendarError::InvalidInput(format!("timestamp '{}': {}", value, e)))
}

fn parse_date(value: &str) -> Result<NaiveDate, VetCalendarError> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe appointment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiAppointmentType {
    Consultation,
    Vaccination,
    Surgery,
    Checkup,
    Grooming,
    Emergency,
    FollowUp,
}

impl From<FfiAppointmentType> for AppointmentType {
    fn from(kind: FfiAppointmentType) -> Self {
        match kind {
            FfiAppointmentType::Consultation => AppointmentType::Consultation,
            FfiAppointmentType::Vaccination => AppointmentType::Vaccination,
            FfiAppointmentType::Surgery => AppointmentType::Surgery,
            FfiAppointmentType::Checkup => AppointmentType::Checkup,
            FfiAppointmentType::Grooming => AppointmentType::Grooming,
            FfiAppointmentType::Emergency => AppointmentType::Emergency,
            FfiAppointmentType::FollowUp => AppointmentType::FollowUp,
        }
    }
}

/// FFI-safe appointment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiAppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl From<FfiAppointmentStatus> for AppointmentStatus {
    fn from(status: FfiAppointmentStatus) -> Self {
        match status {
            FfiAppointmentStatus::Scheduled => AppointmentStatus::Scheduled,
            FfiAppointmentStatus::Confirmed => AppointmentStatus::Confirmed,
            FfiAppointmentStatus::InProgress => AppointmentStatus::InProgress,
            FfiAppointmentStatus::Completed => AppointmentStatus::Completed,
            FfiAppointmentStatus::Cancelled => AppointmentStatus::Cancelled,
        }
    }
}

/// FFI-safe appointment. Timestamps are local `YYYY-MM-DDTHH:MM[:SS]`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub title: String,
    pub organization_id: String,
    pub appointment_type: FfiAppointmentType,
    pub status: FfiAppointmentStatus,
    pub start: String,
    pub end: String,
}

impl TryFrom<FfiAppointment> for Appointment {
    type Error = VetCalendarError;

    fn try_from(appt: FfiAppointment) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: AppointmentId::Text(appt.id),
            title: appt.title,
            organization_id: appt.organization_id,
            appointment_type: appt.appointment_type.into(),
            status: appt.status.into(),
            start: parse_timestamp(&appt.start)?,
            end: parse_timestamp(&appt.end)?,
            pet_id: None,
            owner_id: None,
            veterinarian: None,
            notes: None,
        })
    }
}

/// FFI-safe filter. `None` lists mean "no restriction".
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiFilter {
    pub organizations: Option<Vec<String>>,
    pub appointment_types: Option<Vec<FfiAppointmentType>>,
    pub statuses: Option<Vec<FfiAppointmentStatus>>,
}

impl From<FfiFilter> for AppointmentFilter {
    fn from(filter: FfiFilter) -> Self {
        AppointmentFilter {
            organizations: filter.organizations.map(|o| o.into_iter().collect()),
            appointment_types: filter
                .appointment_types
                .map(|t| t.into_iter().map(AppointmentType::from).collect()),
            statuses: filter
                .statuses
                .map(|s| s.into_iter().map(AppointmentStatus::from).collect()),
        }
    }
}

/// FFI-safe geometry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiGeometry {
    pub top_percent: f64,
    pub height_percent: f64,
    pub left_percent: f64,
    pub right_percent: f64,
}

impl From<Geometry> for FfiGeometry {
    fn from(geometry: Geometry) -> Self {
        Self {
            top_percent: geometry.top_percent,
            height_percent: geometry.height_percent,
            left_percent: geometry.left_percent,
            right_percent: geometry.right_percent,
        }
    }
}

/// FFI-safe placed block.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPlacedAppointment {
    pub id: String,
    pub column: u32,
    pub geometry: FfiGeometry,
}

/// FFI-safe day layout.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDayLayout {
    pub date: String,
    pub column_count: u32,
    pub entries: Vec<FfiPlacedAppointment>,
}

impl From<&DayLayout> for FfiDayLayout {
    fn from(layout: &DayLayout) -> Self {
        Self {
            date: layout.date.format("%Y-%m-%d").to_string(),
            column_count: layout.column_count() as u32,
            entries: layout
                .entries
                .iter()
                .map(|entry| FfiPlacedAppointment {
                    id: entry.id.to_string(),
                    column: entry.column as u32,
                    geometry: entry.geometry.into(),
                })
                .collect(),
        }
    }
}

/// FFI-safe week layout.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWeekLayout {
    pub days: Vec<FfiDayLayout>,
}

/// FFI-safe month cell.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMonthDay {
    pub date: String,
    pub visible_ids: Vec<String>,
    pub overflow: u32,
}

impl From<MonthDay> for FfiMonthDay {
    fn from(day: MonthDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            visible_ids: day.visible.iter().map(|slot| slot.id.to_string()).collect(),
            overflow: day.overflow as u32,
        }
    }
}
