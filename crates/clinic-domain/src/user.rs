//! User domain types.

use serde::{Deserialize, Serialize};

/// Concrete kind of a clinic user.
///
/// Stored as the `kind` discriminator of the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Patient,
    Psychologist,
}

impl UserKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Psychologist => "psychologist",
        }
    }

    /// Parse the stored discriminator. Returns `None` for unknown values.
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "patient" => Some(Self::Patient),
            "psychologist" => Some(Self::Psychologist),
            _ => None,
        }
    }
}

/// Minimum age accepted for any user.
pub const MIN_AGE: i32 = 18;
