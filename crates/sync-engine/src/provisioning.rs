//! Board provisioning support: pre-seeding merge records with computed
//! sprint due dates so the scheduler can pick the sprints up as they fall
//! due.

use sync_core::SprintMergeRecord;
use sync_core::schedule::sprint_window;
use sync_db::{MergeRecordRepository, Result as DbResult};

use chrono::{DateTime, FixedOffset, Utc, Weekday};

/// Seed one record per sprint with its computed due date and no
/// synchronization timestamp. Rows that already exist are left untouched,
/// so re-provisioning a board never resets its synchronization state.
pub async fn seed_sprint_records(
    records: &MergeRecordRepository,
    board_id: &str,
    project_start: DateTime<Utc>,
    sprint_count: u32,
    week_start: Weekday,
    offset: FixedOffset,
) -> DbResult<()> {
    for sprint_number in 1..=sprint_count {
        let (_, due) = sprint_window(sprint_number, project_start, week_start, offset);

        records
            .seed(&SprintMergeRecord::seeded(
                board_id,
                i64::from(sprint_number),
                Some(due),
            ))
            .await?;
    }

    Ok(())
}
