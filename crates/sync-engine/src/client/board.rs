use crate::client::error::Result as ClientResult;
use crate::client::{BoardClient, api_error_from_response};

use sync_core::{SprintList, SprintTask};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;

/// HTTP client for the task-board API
pub struct HttpBoardClient {
    base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpBoardClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Board API URL (e.g., "http://127.0.0.1:8080")
    /// * `api_key` - Optional key sent in the X-Api-Key header
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client,
        })
    }

    /// Build a request with the optional API-key header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref key) = self.api_key {
            req = req.header("X-Api-Key", key);
        }

        req
    }
}

#[async_trait]
impl BoardClient for HttpBoardClient {
    async fn get_sprint(
        &self,
        board_id: &str,
        list_name: &str,
    ) -> ClientResult<Option<SprintList>> {
        let response = self
            .request(Method::GET, &format!("/api/v1/boards/{board_id}/sprint"))
            .query(&[("name", list_name)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(api_error_from_response(response).await);
        }

        let list: SprintList = response.json().await?;
        Ok(Some(list))
    }

    async fn override_sprint(
        &self,
        board_id: &str,
        list_id: &str,
        tasks: &[SprintTask],
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct OverrideRequest<'a> {
            tasks: &'a [SprintTask],
        }

        let response = self
            .request(
                Method::PUT,
                &format!("/api/v1/boards/{board_id}/lists/{list_id}/tasks"),
            )
            .json(&OverrideRequest { tasks })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error_from_response(response).await);
        }

        Ok(())
    }
}
