//! Prompt construction and reply parsing for the AI-assisted merge path.
//!
//! The reply contract is strict: a single JSON array of tasks in the fixed
//! snapshot shape. Anything else fails the merge; there is no silent
//! fallback to either board's data.

use crate::error::{MergeError, Result as MergeResult};

use sync_core::{ErrorLocation, SprintTask, parse_task_array};

use std::panic::Location;

pub(crate) fn build_merge_prompt(
    live: &[SprintTask],
    template: &[SprintTask],
) -> MergeResult<String> {
    let template_json = to_json(template)?;
    let live_json = to_json(live)?;

    Ok(format!(
        r#"You are reconciling a team's sprint task list with the staff-maintained template version of the same sprint.

Template tasks (the authoritative set):
{template_json}

Live board tasks (may contain team customizations):
{live_json}

Rules:
- Every template task must appear in the result; add any that are missing from the live board.
- When a live task corresponds to a template task (same role, a closely similar name, or a matching task_id), keep the live task's edited description and checklist.
- Do not invent tasks that appear in neither input.
- Reply with ONLY a JSON array of tasks and nothing else. Each task must have exactly these fields: "name", "description", "due_date", "role", "checklist", "task_id". Use null for an unknown due_date or task_id and [] for an empty checklist."#
    ))
}

pub(crate) fn parse_merge_reply(reply: &str) -> MergeResult<Vec<SprintTask>> {
    let body = strip_code_fence(reply);

    if body.is_empty() {
        return Err(MergeError::AiReply {
            message: "empty reply".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let tasks = parse_task_array(body).map_err(|e| MergeError::AiReply {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if tasks.is_empty() {
        return Err(MergeError::AiReply {
            message: "reply contained zero tasks".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(tasks)
}

/// Trim the reply and unwrap a fenced-code block if the model added one,
/// with or without a language tag on the opening fence.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // The opening fence line may carry a language tag ("```json")
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };

    body.trim().strip_suffix("```").unwrap_or(body).trim()
}

fn to_json(tasks: &[SprintTask]) -> MergeResult<String> {
    serde_json::to_string_pretty(tasks).map_err(|e| MergeError::Validation {
        message: format!("task serialization failed: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
