use crate::error::ClinicServiceError;

/// Outcome of an include. Failures are logged when the outcome is built and
/// never raised, so ignoring the value is always safe.
#[derive(Debug)]
pub enum Inclusion<T> {
    Included(T),
    Rejected(ClinicServiceError),
}

impl<T> Inclusion<T> {
    pub(crate) fn settle(entity: &'static str, result: Result<T, ClinicServiceError>) -> Self {
        match result {
            Ok(record) => Self::Included(record),
            Err(e) => {
                tracing::error!(entity, kind = e.kind(), error = %e, "include rejected");
                Self::Rejected(e)
            }
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included(_))
    }

    pub fn included(self) -> Option<T> {
        match self {
            Self::Included(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }
}
