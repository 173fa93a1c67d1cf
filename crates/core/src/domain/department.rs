// Department Queue Engine (colegiado)

use crate::domain::error::{DomainError, Result};
use crate::domain::service::{ServiceLedger, ServiceRecord};
use crate::domain::status::{QueuePosition, QueueStatus};
use crate::domain::student::{RegistrationId, Student};
use crate::domain::validation::{
    is_valid_department_code, is_valid_registration_id, normalize_department_code,
};
use crate::port::{SystemTimeProvider, TimeProvider};
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Department code (uppercase letters)
pub type DepartmentCode = String;

/// A department and the authoritative state of its service queue
///
/// The department owns its copy of every registered student. The waiting
/// queue and the current slot hold registration numbers that always resolve
/// through the registry.
pub struct Department {
    code: DepartmentCode,
    name: String,
    registered: BTreeMap<RegistrationId, Student>,
    waiting: VecDeque<RegistrationId>,
    current: Option<RegistrationId>,
    ever_served: HashSet<RegistrationId>,
    service_count: u64,
    history: ServiceLedger,
    time_provider: Arc<dyn TimeProvider>,
}

impl Department {
    /// Create a department with an empty queue, stamped by the system clock
    pub fn new(code: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self::with_time_provider(code, name, Arc::new(SystemTimeProvider))
    }

    /// Create a department with an injected clock for the service ledger
    pub fn with_time_provider(
        code: impl AsRef<str>,
        name: impl Into<String>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            code: normalize_department_code(code.as_ref()),
            name: name.into(),
            registered: BTreeMap::new(),
            waiting: VecDeque::new(),
            current: None,
            ever_served: HashSet::new(),
            service_count: 0,
            history: ServiceLedger::new(),
            time_provider,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replace the code; lowercase input is stored uppercased
    ///
    /// Registered entries follow the new code. Copies held by callers keep
    /// the code they were registered under.
    pub fn set_code(&mut self, code: impl AsRef<str>) {
        let code = normalize_department_code(code.as_ref());
        for student in self.registered.values_mut() {
            student.attach_department(code.clone());
        }
        info!(from = %self.code, to = %code, "Department code changed");
        self.code = code;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// True iff the code is one or more letters A-Z
    pub fn is_valid(&self) -> bool {
        is_valid_department_code(&self.code)
    }

    /// Bind a student to this department
    ///
    /// Attaches this department's code to `student` and stores a copy in the
    /// registry. A student registered under an existing number replaces the
    /// previous entry.
    ///
    /// # Errors
    ///
    /// `AlreadyAffiliated` if the student already belongs to a department.
    pub fn register(&mut self, student: &mut Student) -> Result<()> {
        if let Some(existing) = student.department() {
            warn!(
                department = %self.code,
                registration_id = %student.registration_id(),
                affiliated_with = %existing,
                "Registration rejected: student already affiliated"
            );
            return Err(DomainError::AlreadyAffiliated {
                registration_id: student.registration_id().to_string(),
                department: existing.to_string(),
            });
        }

        student.attach_department(self.code.clone());
        let replaced = self
            .registered
            .insert(student.registration_id().to_string(), student.clone())
            .is_some();

        info!(
            department = %self.code,
            registration_id = %student.registration_id(),
            replaced,
            "Student registered"
        );
        Ok(())
    }

    /// Look up a registered student
    pub fn find_student(&self, registration_id: &str) -> Option<&Student> {
        self.registered.get(registration_id)
    }

    /// Look up a registered student, failing with `StudentNotFound`
    pub fn find_student_or_err(&self, registration_id: &str) -> Result<&Student> {
        self.find_student(registration_id)
            .ok_or_else(|| DomainError::StudentNotFound(registration_id.to_string()))
    }

    /// Rename a registered student
    ///
    /// # Errors
    ///
    /// `StudentNotFound` if no student has that number here.
    pub fn rename_student(&mut self, registration_id: &str, name: impl Into<String>) -> Result<()> {
        let student = self
            .registered
            .get_mut(registration_id)
            .ok_or_else(|| DomainError::StudentNotFound(registration_id.to_string()))?;
        student.set_name(name);
        info!(department = %self.code, registration_id, "Student renamed");
        Ok(())
    }

    /// Registered students ordered by registration number
    pub fn registered_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.registered.values()
    }

    /// Waiting students in call order
    pub fn waiting_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.waiting
            .iter()
            .filter_map(move |id| self.registered.get(id))
    }

    pub fn queue_position(&self, registration_id: &str) -> QueuePosition {
        if self.current.as_deref() == Some(registration_id) {
            return QueuePosition::InService;
        }

        self.waiting
            .iter()
            .position(|id| id == registration_id)
            .map(|index| QueuePosition::Waiting(index + 1))
            .unwrap_or(QueuePosition::Absent)
    }

    pub fn queue_status(&self, registration_id: &str) -> QueueStatus {
        match self.queue_position(registration_id) {
            QueuePosition::InService => QueueStatus::CurrentlyServed,
            QueuePosition::Waiting(_) => QueueStatus::Waiting,
            QueuePosition::Absent if self.ever_served.contains(registration_id) => {
                QueueStatus::AlreadyServed
            }
            QueuePosition::Absent => QueueStatus::NotInQueue,
        }
    }

    /// Add a registered student to the back of the queue
    ///
    /// # Errors
    ///
    /// - `InvalidRegistrationFormat` if the number is not nine digits (checked first)
    /// - `StudentNotRegistered` if no student has that number here
    /// - `AlreadyQueuedOrServed` if the student is waiting or being served
    pub fn enqueue(&mut self, registration_id: &str) -> Result<()> {
        if !is_valid_registration_id(registration_id) {
            warn!(department = %self.code, registration_id, "Enqueue rejected: invalid format");
            return Err(DomainError::InvalidRegistrationFormat(
                registration_id.to_string(),
            ));
        }

        if self.find_student(registration_id).is_none() {
            warn!(department = %self.code, registration_id, "Enqueue rejected: not registered");
            return Err(DomainError::StudentNotRegistered(
                registration_id.to_string(),
            ));
        }

        let status = self.queue_status(registration_id);
        if !status.can_enqueue() {
            warn!(
                department = %self.code,
                registration_id,
                status = %status,
                "Enqueue rejected: already in queue"
            );
            return Err(DomainError::AlreadyQueuedOrServed {
                registration_id: registration_id.to_string(),
                status,
            });
        }

        self.waiting.push_back(registration_id.to_string());
        info!(
            department = %self.code,
            registration_id,
            position = self.waiting.len(),
            "Student enqueued"
        );
        Ok(())
    }

    /// True iff nobody is waiting (someone may still be served)
    pub fn is_queue_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Call the next waiting student
    ///
    /// Returns `None` when nobody is waiting; nothing changes in that case.
    /// The previously served student stays visible as `AlreadyServed`.
    pub fn call_next(&mut self) -> Option<&Student> {
        let Some(next) = self.waiting.pop_front() else {
            debug!(department = %self.code, "Call next: queue empty");
            return None;
        };

        self.service_count += 1;
        self.ever_served.insert(next.clone());
        let ticket = self
            .history
            .record(next.clone(), self.time_provider.now_millis());

        info!(
            department = %self.code,
            registration_id = %next,
            ticket,
            remaining = self.waiting.len(),
            "Student called"
        );

        self.current = Some(next);
        self.current_student()
    }

    pub fn current_student(&self) -> Option<&Student> {
        self.current
            .as_deref()
            .and_then(|id| self.registered.get(id))
    }

    /// Head of the queue, without removing it
    pub fn peek_next(&self) -> Option<&Student> {
        self.waiting.front().and_then(|id| self.registered.get(id))
    }

    /// Distinct students served or being served
    pub fn total_students_ever_served(&self) -> usize {
        self.ever_served.len()
    }

    /// Calls made, counting repeat visits
    pub fn total_service_count(&self) -> u64 {
        self.service_count
    }

    pub fn total_waiting(&self) -> usize {
        self.waiting.len()
    }

    pub fn service_history(&self) -> &[ServiceRecord] {
        self.history.records()
    }

    pub fn times_served(&self, registration_id: &str) -> usize {
        self.history.times_served(registration_id)
    }

    pub fn last_served_at(&self, registration_id: &str) -> Option<i64> {
        self.history.last_served_at(registration_id)
    }
}

impl std::fmt::Debug for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Department")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("registered", &self.registered.len())
            .field("waiting", &self.waiting)
            .field("current", &self.current)
            .field("service_count", &self.service_count)
            .finish_non_exhaustive()
    }
}
