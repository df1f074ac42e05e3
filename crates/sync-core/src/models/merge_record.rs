use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracking row for one (board, sprint) pair. At most one row exists per
/// key; a null `synced_at` means the sprint has never been synchronized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintMergeRecord {
    pub board_id: String,
    pub sprint_number: i64,

    pub synced_at: Option<DateTime<Utc>>,
    pub list_id: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl SprintMergeRecord {
    /// Record as pre-seeded at board provisioning: a computed due date and
    /// no synchronization timestamp yet.
    pub fn seeded(
        board_id: impl Into<String>,
        sprint_number: i64,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            sprint_number,
            synced_at: None,
            list_id: None,
            due_date,
        }
    }

    pub fn is_synchronized(&self) -> bool {
        self.synced_at.is_some()
    }

    /// Whether the scheduler should pick this record up: past due and never
    /// synchronized. Records without a due date are never due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.is_synchronized() && self.due_date.is_some_and(|due| due <= now)
    }
}
