use reqwest::Client;
use serde_json::Value;

use crate::core::error::{AppError, UpstreamFailure};
use crate::core::http_client::build_http_client;
use crate::features::itinerary::dto::{ChatCompletionRequest, ChatCompletionResponse};

pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, disable_proxy: bool) -> Result<Self, AppError> {
        let http_client = build_http_client(disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends one chat-completion request. There is no retry and no timeout
    /// beyond the HTTP client's defaults.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamFailure> {
        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| UpstreamFailure::Transport(err.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            UpstreamFailure::Transport(format!("failed to read response body: {err}"))
        })?;

        if !status.is_success() {
            return Err(UpstreamFailure::Status {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        serde_json::from_str::<ChatCompletionResponse>(&body)
            .map_err(|err| UpstreamFailure::Envelope(err.to_string()))
    }
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(|message| message.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}
