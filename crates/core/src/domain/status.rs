// Queue Status Model (derived, never stored)

use serde::{Deserialize, Serialize};

/// Where a student stands relative to a department's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    CurrentlyServed,
    Waiting,
    AlreadyServed,
    NotInQueue,
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueStatus::CurrentlyServed => write!(f, "CURRENTLY_SERVED"),
            QueueStatus::Waiting => write!(f, "WAITING"),
            QueueStatus::AlreadyServed => write!(f, "ALREADY_SERVED"),
            QueueStatus::NotInQueue => write!(f, "NOT_IN_QUEUE"),
        }
    }
}

impl QueueStatus {
    /// Statuses from which `enqueue` is accepted
    pub fn can_enqueue(self) -> bool {
        matches!(self, QueueStatus::AlreadyServed | QueueStatus::NotInQueue)
    }
}

/// Position of a student in the queue
///
/// Encodes as an integer via [`QueuePosition::as_i64`]:
/// `0` while being served, the 1-based rank while waiting, `-1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "rank")]
pub enum QueuePosition {
    InService,
    Waiting(usize),
    Absent,
}

impl QueuePosition {
    pub fn as_i64(self) -> i64 {
        match self {
            QueuePosition::InService => 0,
            QueuePosition::Waiting(rank) => rank as i64,
            QueuePosition::Absent => -1,
        }
    }
}

impl From<QueuePosition> for i64 {
    fn from(position: QueuePosition) -> Self {
        position.as_i64()
    }
}

impl std::fmt::Display for QueuePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}
