use crate::client::{AiClient, BoardClient};
use crate::error::{MergeError, Result as MergeResult};
use crate::prompt::{build_merge_prompt, parse_merge_reply};

use sync_core::{SprintList, SprintTask, sprint_list_names};
use sync_db::{BoardRepository, MergeRecordRepository};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info, warn};

/// How the replacement task set is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Last authored template wins: the live list becomes a verbatim copy
    /// of the template list.
    Overwrite,
    /// Reconcile both lists through the AI collaborator, preserving live
    /// customizations of corresponding tasks.
    AiAssisted,
}

#[derive(Debug, Clone)]
pub struct MergeSummary {
    pub applied_tasks: usize,
    pub list_id: String,
}

/// Fetches one sprint from the live board and its linked template board,
/// reconciles them, and overwrites the live list. Does not check due
/// dates: invoking this directly forces a re-merge regardless of the
/// tracking record's state.
pub struct SprintMergeExecutor {
    boards: BoardRepository,
    records: MergeRecordRepository,
    board_api: Arc<dyn BoardClient>,
    ai: Arc<dyn AiClient>,
}

impl SprintMergeExecutor {
    pub fn new(
        boards: BoardRepository,
        records: MergeRecordRepository,
        board_api: Arc<dyn BoardClient>,
        ai: Arc<dyn AiClient>,
    ) -> Self {
        Self {
            boards,
            records,
            board_api,
            ai,
        }
    }

    pub async fn execute(
        &self,
        project_id: i64,
        live_board_id: &str,
        sprint_number: i64,
        strategy: MergeStrategy,
    ) -> MergeResult<MergeSummary> {
        // 1. Validate input
        if project_id <= 0 {
            return Err(validation(format!(
                "project_id must be positive, got {project_id}"
            )));
        }
        if live_board_id.trim().is_empty() {
            return Err(validation("live board id must not be empty".to_string()));
        }
        if sprint_number <= 0 {
            return Err(validation(format!(
                "sprint_number must be positive, got {sprint_number}"
            )));
        }

        debug!("[board {live_board_id}] sprint {sprint_number} merge starting ({strategy:?})");

        // 2. The board must exist, belong to the project, and carry a
        //    template link
        let board = self
            .boards
            .find_by_id(live_board_id)
            .await?
            .filter(|b| b.project_id == project_id)
            .ok_or_else(|| MergeError::BoardNotFound {
                board_id: live_board_id.to_string(),
                project_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !board.has_template() {
            return Err(MergeError::NoTemplateLinked {
                board_id: live_board_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let template_board_id = board.template_board_id.as_deref().unwrap_or_default();

        // 3. Template sprint must exist and have tasks
        let template = self
            .find_sprint(template_board_id, sprint_number)
            .await?
            .filter(|list| !list.tasks.is_empty())
            .ok_or_else(|| MergeError::TemplateSprintMissing {
                list_name: format!("Sprint{sprint_number}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // 4. The live list must already exist; this operation never
        //    creates it
        let live = self
            .find_sprint(live_board_id, sprint_number)
            .await?
            .ok_or_else(|| MergeError::LiveSprintMissing {
                list_name: format!("Sprint{sprint_number}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // 5. Derive the replacement set
        let tasks = match strategy {
            MergeStrategy::Overwrite => template.tasks,
            MergeStrategy::AiAssisted => self.reconcile(&live.tasks, &template.tasks).await?,
        };

        // 6. Overwrite the live list as one logical operation
        self.board_api
            .override_sprint(live_board_id, &live.list_id, &tasks)
            .await
            .map_err(|source| MergeError::Board {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        // 7. Track the merge. The board write already happened, so a
        //    failed upsert is logged and swallowed; the next scheduled run
        //    re-merges this sprint.
        let due_date = tasks.first().and_then(|t| t.due_date);
        if let Err(e) = self
            .records
            .mark_synced(live_board_id, sprint_number, &live.list_id, due_date, Utc::now())
            .await
        {
            warn!(
                "[board {live_board_id}] sprint {sprint_number} merged but tracking upsert failed: {e}"
            );
        }

        info!(
            "[board {live_board_id}] sprint {sprint_number} merged, {} task(s) applied",
            tasks.len()
        );

        Ok(MergeSummary {
            applied_tasks: tasks.len(),
            list_id: live.list_id,
        })
    }

    /// Probe both list-name spellings on a board, first match wins.
    async fn find_sprint(
        &self,
        board_id: &str,
        sprint_number: i64,
    ) -> MergeResult<Option<SprintList>> {
        for name in sprint_list_names(sprint_number) {
            let found = self
                .board_api
                .get_sprint(board_id, &name)
                .await
                .map_err(|source| MergeError::Board {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;

            if found.is_some() {
                return Ok(found);
            }
        }

        Ok(None)
    }

    async fn reconcile(
        &self,
        live: &[SprintTask],
        template: &[SprintTask],
    ) -> MergeResult<Vec<SprintTask>> {
        let prompt = build_merge_prompt(live, template)?;

        let reply = self
            .ai
            .generate_text(&prompt)
            .await
            .map_err(|source| MergeError::Ai {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        parse_merge_reply(&reply)
    }
}

#[track_caller]
fn validation(message: String) -> MergeError {
    MergeError::Validation {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
