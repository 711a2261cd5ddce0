//! Appointment models.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Appointment identifier. Clinics import both numeric PIMS ids and
/// locally generated string ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppointmentId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentId::Numeric(n) => write!(f, "{}", n),
            AppointmentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AppointmentId {
    fn from(id: i64) -> Self {
        AppointmentId::Numeric(id)
    }
}

impl From<String> for AppointmentId {
    fn from(id: String) -> Self {
        AppointmentId::Text(id)
    }
}

impl From<&str> for AppointmentId {
    fn from(id: &str) -> Self {
        AppointmentId::Text(id.to_string())
    }
}

/// Kind of visit booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    Vaccination,
    Surgery,
    Checkup,
    Grooming,
    Emergency,
    FollowUp,
}

/// Booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    /// Booked, not yet confirmed by the owner
    Scheduled,
    /// Owner confirmed attendance
    Confirmed,
    /// Patient is with the vet
    InProgress,
    /// Visit finished
    Completed,
    /// Booking cancelled (still shown, struck through)
    Cancelled,
}

/// A time-ranged calendar entry, the only shape the layout engine reads.
///
/// Times are local wall-clock. `end > start` is expected but not enforced;
/// zero-width and inverted slots are laid out without error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    pub id: AppointmentId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduledSlot {
    /// Create a slot from its id and wall-clock bounds.
    pub fn new(id: impl Into<AppointmentId>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Length of the slot. Negative for inverted input.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar date the slot is bucketed under (its start date).
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Half-open overlap test, see [`crate::layout::overlaps`].
    pub fn overlaps(&self, other: &ScheduledSlot) -> bool {
        crate::layout::overlaps(self, other)
    }
}

/// A full appointment as the practice application holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment ID
    pub id: AppointmentId,
    /// Short title shown on the calendar block
    pub title: String,
    /// Organization (clinic / branch) the appointment belongs to
    pub organization_id: String,
    /// Kind of visit
    pub appointment_type: AppointmentType,
    /// Booking status
    pub status: AppointmentStatus,
    /// Start time (local wall-clock)
    pub start: NaiveDateTime,
    /// End time (local wall-clock)
    pub end: NaiveDateTime,
    /// Patient (pet) ID
    pub pet_id: Option<String>,
    /// Owner/client ID
    pub owner_id: Option<String>,
    /// Attending veterinarian
    pub veterinarian: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Appointment {
    /// Create a new scheduled appointment with a generated ID.
    pub fn new(
        title: String,
        organization_id: String,
        appointment_type: AppointmentType,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: AppointmentId::Text(uuid::Uuid::new_v4().to_string()),
            title,
            organization_id,
            appointment_type,
            status: AppointmentStatus::Scheduled,
            start,
            end,
            pet_id: None,
            owner_id: None,
            veterinarian: None,
            notes: None,
        }
    }

    /// The part of the appointment the layout engine consumes.
    pub fn slot(&self) -> ScheduledSlot {
        ScheduledSlot {
            id: self.id.clone(),
            start: self.start,
            end: self.end,
        }
    }

    /// Check if the appointment was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 12)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_new_appointment() {
        let appt = Appointment::new(
            "Annual shots".into(),
            "clinic-north".into(),
            AppointmentType::Vaccination,
            at(9, 0),
            at(9, 30),
        );
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert!(!appt.is_cancelled());
        assert!(matches!(&appt.id, AppointmentId::Text(s) if s.len() == 36)); // UUID format
    }

    #[test]
    fn test_slot_projection() {
        let mut appt = Appointment::new(
            "Spay".into(),
            "clinic-north".into(),
            AppointmentType::Surgery,
            at(10, 0),
            at(12, 0),
        );
        appt.id = AppointmentId::Numeric(42);

        let slot = appt.slot();
        assert_eq!(slot.id, AppointmentId::Numeric(42));
        assert_eq!(slot.duration(), Duration::hours(2));
        assert_eq!(slot.date(), NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    }

    #[test]
    fn test_id_display_and_serde() {
        assert_eq!(AppointmentId::from(7).to_string(), "7");
        assert_eq!(AppointmentId::from("appt-7").to_string(), "appt-7");

        let numeric: AppointmentId = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, AppointmentId::Numeric(7));
        let text: AppointmentId = serde_json::from_str("\"appt-7\"").unwrap();
        assert_eq!(text, AppointmentId::Text("appt-7".into()));
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&AppointmentType::FollowUp).unwrap();
        assert_eq!(json, "\"follow-up\"");
        let status: AppointmentStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, AppointmentStatus::InProgress);
    }
}
