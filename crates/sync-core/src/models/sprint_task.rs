use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Denormalized, transport-level view of one task: exactly the fields the
/// merge reasons about. Comments, attachments and activity history are
/// deliberately absent. The field set is fixed; unknown keys are rejected
/// so an AI reply cannot smuggle extra structure past the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SprintTask {
    pub name: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    /// Assigned-role name, the primary correlation key across the live and
    /// template versions of the same logical task.
    pub role: String,
    pub checklist: Vec<String>,
    /// Stable identifier carried when the board API provides one.
    pub task_id: Option<String>,
}

/// A sprint as fetched from a board: the list identifier plus its ordered
/// task snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintList {
    pub list_id: String,
    pub tasks: Vec<SprintTask>,
}

/// Strict parse of a JSON task array in the fixed snapshot shape.
#[track_caller]
pub fn parse_task_array(raw: &str) -> CoreResult<Vec<SprintTask>> {
    serde_json::from_str::<Vec<SprintTask>>(raw).map_err(|e| CoreError::TaskArray {
        message: format!("not a task array: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
