use crate::client::error::{ClientError, Result as ClientResult};
use crate::client::{AiClient, api_error_from_response};

use sync_core::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::{Value, json};

/// HTTP client for an OpenAI-style chat-completions endpoint
pub struct HttpAiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: ReqwestClient,
}

impl HttpAiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        model: &str,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            model: model.to_string(),
            client,
        })
    }
}

#[async_trait]
impl AiClient for HttpAiClient {
    async fn generate_text(&self, prompt: &str) -> ClientResult<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut req = self.client.request(Method::POST, &url).json(&json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0.2,
        }));

        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            return Err(api_error_from_response(response).await);
        }

        let body: Value = response.json().await?;

        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| ClientError::Decode {
                message: "completion reply carried no message content".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
