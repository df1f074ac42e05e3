use crate::executor::{MergeStrategy, SprintMergeExecutor};

use sync_db::{BoardRepository, MergeRecordRepository, Result as DbResult, TeamMemberRepository};

use chrono::Utc;
use log::{debug, info, warn};

/// Aggregates of one scan-and-merge pass.
#[derive(Debug, Clone, Default)]
pub struct SchedulerReport {
    pub merged: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Scans boards whose team has reached the active-engagement state and
/// merges every sprint whose tracking record is past due and never
/// synchronized. Boards are processed one at a time, and sprints within a
/// board in ascending order, because each merge writes to a shared list on
/// the live board.
pub struct DueSprintScheduler {
    teams: TeamMemberRepository,
    boards: BoardRepository,
    records: MergeRecordRepository,
    executor: SprintMergeExecutor,
}

impl DueSprintScheduler {
    pub fn new(
        teams: TeamMemberRepository,
        boards: BoardRepository,
        records: MergeRecordRepository,
        executor: SprintMergeExecutor,
    ) -> Self {
        Self {
            teams,
            boards,
            records,
            executor,
        }
    }

    /// One full pass. Per-board and per-sprint failures land in the report
    /// and never abort the rest of the run; only the initial eligibility
    /// query can fail the pass as a whole. Immediately re-running a
    /// successful pass merges nothing, because merged records now carry a
    /// synchronization timestamp.
    pub async fn run(&self) -> DbResult<SchedulerReport> {
        let now = Utc::now();
        let board_ids = self.teams.boards_with_active_members().await?;

        info!(
            "Merge pass starting: {} board(s) with an active team",
            board_ids.len()
        );

        let mut report = SchedulerReport::default();

        for board_id in board_ids {
            let board = match self.boards.find_by_id(&board_id).await {
                Ok(Some(board)) => board,
                Ok(None) => {
                    // Upstream data anomaly, not a merge failure
                    warn!(
                        "[board {board_id}] referenced by an active member but missing from the boards table, skipping"
                    );
                    continue;
                }
                Err(e) => {
                    report.failed += 1;
                    report.errors.push(format!("boardId={board_id}: {e}"));
                    continue;
                }
            };

            let due = match self.records.find_due_unsynced(&board_id, now).await {
                Ok(due) => due,
                Err(e) => {
                    report.failed += 1;
                    report.errors.push(format!("boardId={board_id}: {e}"));
                    continue;
                }
            };

            for record in due {
                match self
                    .executor
                    .execute(
                        board.project_id,
                        &board_id,
                        record.sprint_number,
                        MergeStrategy::AiAssisted,
                    )
                    .await
                {
                    Ok(summary) => {
                        report.merged += 1;
                        debug!(
                            "[board {board_id}] sprint {} merged ({} tasks)",
                            record.sprint_number, summary.applied_tasks
                        );
                    }
                    Err(e) => {
                        report.failed += 1;
                        report.errors.push(format!(
                            "boardId={board_id}, sprintNumber={}: {e}",
                            record.sprint_number
                        ));
                    }
                }
            }
        }

        info!(
            "Merge pass finished: merged={}, failed={}",
            report.merged, report.failed
        );

        Ok(report)
    }
}
