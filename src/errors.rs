use thiserror::Error;

/// Failures of directory lookups and roster mutations.
///
/// No variant leaves the directory partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

pub type ActivityResult<T> = Result<T, ActivityError>;
