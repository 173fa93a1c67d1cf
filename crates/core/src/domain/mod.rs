// Domain Layer - Pure business logic and entities

pub mod department;
pub mod error;
pub mod service;
pub mod status;
pub mod student;
pub mod validation;

// Re-exports
pub use department::{Department, DepartmentCode};
pub use error::DomainError;
pub use service::{ServiceLedger, ServiceRecord, Ticket};
pub use status::{QueuePosition, QueueStatus};
pub use student::{RegistrationId, Student};
pub use validation::{
    is_valid_department_code, is_valid_registration_id, normalize_department_code,
};
