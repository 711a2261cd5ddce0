//! Organization, type and status filters applied before layout.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Appointment, AppointmentStatus, AppointmentType, ScheduledSlot};

/// Allow-lists for the calendar toolbar. `None` means "no restriction";
/// an empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub organizations: Option<HashSet<String>>,
    pub appointment_types: Option<HashSet<AppointmentType>>,
    pub statuses: Option<HashSet<AppointmentStatus>>,
}

impl AppointmentFilter {
    /// A filter that lets everything through.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_organizations<I, S>(mut self, organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.organizations = Some(organizations.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_types<I: IntoIterator<Item = AppointmentType>>(mut self, types: I) -> Self {
        self.appointment_types = Some(types.into_iter().collect());
        self
    }

    pub fn with_statuses<I: IntoIterator<Item = AppointmentStatus>>(mut self, statuses: I) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    /// Check a single appointment against every configured allow-list.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        allows(&self.organizations, &appointment.organization_id)
            && allows(&self.appointment_types, &appointment.appointment_type)
            && allows(&self.statuses, &appointment.status)
    }

    /// Slots of the matching appointments, in input order.
    pub fn apply(&self, appointments: &[Appointment]) -> Vec<ScheduledSlot> {
        let slots: Vec<ScheduledSlot> = appointments
            .iter()
            .filter(|appointment| self.matches(appointment))
            .map(Appointment::slot)
            .collect();

        trace!(
            input = appointments.len(),
            kept = slots.len(),
            "filtered appointments"
        );

        slots
    }
}

fn allows<T: Eq + std::hash::Hash>(allowed: &Option<HashSet<T>>, value: &T) -> bool {
    match allowed {
        Some(set) => set.contains(value),
        None => true,
    }
}
