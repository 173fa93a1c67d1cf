// Domain Error Types

use crate::domain::status::QueueStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Student {registration_id} is already affiliated with department {department}")]
    AlreadyAffiliated {
        registration_id: String,
        department: String,
    },

    #[error("Invalid registration number: {0:?} (expected 9 digits)")]
    InvalidRegistrationFormat(String),

    #[error("Student {0} is not registered with this department")]
    StudentNotRegistered(String),

    #[error("Student {registration_id} cannot be enqueued: {status}")]
    AlreadyQueuedOrServed {
        registration_id: String,
        status: QueueStatus,
    },

    #[error("Student not found: {0}")]
    StudentNotFound(String),
}

impl DomainError {
    /// Queue status carried by an enqueue rejection
    pub fn status(&self) -> Option<QueueStatus> {
        match self {
            DomainError::AlreadyQueuedOrServed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
