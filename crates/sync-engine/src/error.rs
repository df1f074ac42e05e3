use crate::client::ClientError;

use sync_core::ErrorLocation;
use sync_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Why one merge attempt failed. Every variant is terminal for that
/// attempt; nothing here is retried automatically. The scheduler renders
/// these through Display into its error list.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("board {board_id} not found for project {project_id} {location}")]
    BoardNotFound {
        board_id: String,
        project_id: i64,
        location: ErrorLocation,
    },

    #[error("no template board linked to {board_id} {location}")]
    NoTemplateLinked {
        board_id: String,
        location: ErrorLocation,
    },

    #[error("template sprint {list_name} missing or empty {location}")]
    TemplateSprintMissing {
        list_name: String,
        location: ErrorLocation,
    },

    #[error("live sprint list {list_name} not found {location}")]
    LiveSprintMissing {
        list_name: String,
        location: ErrorLocation,
    },

    #[error("Board API error: {source} {location}")]
    Board {
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("AI completion error: {source} {location}")]
    Ai {
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("AI merge reply rejected: {message} {location}")]
    AiReply {
        message: String,
        location: ErrorLocation,
    },

    #[error("Tracking store error: {source} {location}")]
    Db {
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for MergeError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
