// Service Ledger - append-only record of every call

use serde::{Deserialize, Serialize};

/// 1-based sequence number of a call
pub type Ticket = u64;

/// One transition into "currently served"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub ticket: Ticket,
    pub registration_id: String,
    pub called_at_millis: i64, // epoch ms
}

/// Ordered history of calls made by a department
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceLedger {
    records: Vec<ServiceRecord>,
}

impl ServiceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its ticket
    pub fn record(&mut self, registration_id: impl Into<String>, called_at_millis: i64) -> Ticket {
        let ticket = self.records.len() as Ticket + 1;
        self.records.push(ServiceRecord {
            ticket,
            registration_id: registration_id.into(),
            called_at_millis,
        });
        ticket
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of times a student has been called
    pub fn times_served(&self, registration_id: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.registration_id == registration_id)
            .count()
    }

    /// Timestamp of the latest call for a student
    pub fn last_served_at(&self, registration_id: &str) -> Option<i64> {
        self.records
            .iter()
            .rev()
            .find(|r| r.registration_id == registration_id)
            .map(|r| r.called_at_millis)
    }
}
