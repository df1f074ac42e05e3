pub mod ai;
pub mod board;
pub mod error;

pub use ai::HttpAiClient;
pub use board::HttpBoardClient;
pub use error::{ClientError, Result as ClientResult};

use sync_core::{ErrorLocation, SprintList, SprintTask};

use std::panic::Location;

use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

/// Narrow contract to the external task-board API. The engine only ever
/// reads one named list at a time and replaces one list's tasks at a time.
#[async_trait]
pub trait BoardClient: Send + Sync {
    /// Fetch the named list and its task snapshots; `None` when the board
    /// has no list by that name.
    async fn get_sprint(
        &self,
        board_id: &str,
        list_name: &str,
    ) -> ClientResult<Option<SprintList>>;

    /// Replace the list's tasks as a single logical operation.
    async fn override_sprint(
        &self,
        board_id: &str,
        list_id: &str,
        tasks: &[SprintTask],
    ) -> ClientResult<()>;
}

/// Narrow contract to the AI completion API.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> ClientResult<String>;
}

/// Turn a non-success response into an API error, preferring the JSON
/// error envelope's message when one is present.
pub(crate) async fn api_error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();

    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => String::from("Unknown error"),
    };

    ClientError::Api {
        status,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
