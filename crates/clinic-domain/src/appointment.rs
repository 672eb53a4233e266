//! Appointment domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress of an appointment.
///
/// Wire format: `bool` (`false` = in progress, `true` = completed).
/// New appointments always start [`AppointmentStatus::InProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum AppointmentStatus {
    #[default]
    InProgress,
    Completed,
}

impl AppointmentStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Human-readable label used in logs and rendered pages.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "Em andamento",
            Self::Completed => "Efetuado",
        }
    }
}

impl From<bool> for AppointmentStatus {
    fn from(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::InProgress
        }
    }
}

impl From<AppointmentStatus> for bool {
    fn from(status: AppointmentStatus) -> Self {
        status.is_completed()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
