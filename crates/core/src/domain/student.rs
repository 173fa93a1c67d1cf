// Student Domain Model

use crate::domain::validation::is_valid_registration_id;
use serde::Serialize;

/// Registration number (matrícula)
pub type RegistrationId = String;

/// Student registry entry
///
/// Carries the code of the department it was registered with. The code is
/// attached once by [`Department::register`](crate::domain::Department::register).
/// The department keeps its own copy of the entry; the caller's value is a
/// snapshot taken at registration, so later renames or code changes made
/// through the department are only visible via
/// [`Department::find_student`](crate::domain::Department::find_student).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    registration_id: RegistrationId,
    name: String,
    department: Option<String>,
}

impl Student {
    /// Create an unaffiliated student. No validation happens here; see [`Student::is_valid`].
    pub fn new(registration_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            name: name.into(),
            department: None,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename this value only; use `Department::rename_student` for a registered entry
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Code of the department this student belongs to
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn has_department(&self) -> bool {
        self.department.is_some()
    }

    /// True iff the registration number is nine digits
    pub fn is_valid(&self) -> bool {
        is_valid_registration_id(&self.registration_id)
    }

    // Unguarded; Department::register enforces the one-department rule
    pub(crate) fn attach_department(&mut self, code: impl Into<String>) {
        self.department = Some(code.into());
    }
}
