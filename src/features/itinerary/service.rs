use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use crate::config::AppConfig;
use crate::core::error::{AppError, UpstreamFailure};
use crate::features::itinerary::client::OpenAiClient;
use crate::features::itinerary::dto::{
    ChatCompletionRequest, ChatCompletionResponse, Itinerary, ItineraryRequest,
};
use crate::features::itinerary::helpers::{build_completion_request, completion_content};
use crate::features::itinerary::mock::build_mock_itinerary;

#[async_trait]
pub trait CompletionSource: Send + Sync {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamFailure>;
}

#[async_trait]
impl CompletionSource for OpenAiClient {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamFailure> {
        self.create_chat_completion(request).await
    }
}

/// How itineraries get produced. Chosen once at startup.
#[derive(Clone)]
pub enum ItineraryStrategy {
    Mock,
    Live(Arc<dyn CompletionSource>),
}

impl ItineraryStrategy {
    /// Live when an API key is configured, mock otherwise.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        match &config.openai_api_key {
            Some(api_key) => {
                let client = OpenAiClient::new(
                    api_key.clone(),
                    config.openai_base_url.clone(),
                    config.disable_proxy,
                )?;
                Ok(Self::Live(Arc::new(client)))
            }
            None => Ok(Self::Mock),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Live(_) => "live",
        }
    }
}

pub struct ItineraryService {
    strategy: ItineraryStrategy,
}

impl ItineraryService {
    pub fn new(strategy: ItineraryStrategy) -> Self {
        Self { strategy }
    }

    pub async fn generate(&self, request: ItineraryRequest) -> Result<Itinerary, AppError> {
        match &self.strategy {
            ItineraryStrategy::Mock => {
                warn!(
                    target: "itinerary",
                    destination = %request.destination,
                    "no OpenAI API key configured, returning mock itinerary"
                );
                Ok(Itinerary::Mock(build_mock_itinerary(&request)))
            }
            ItineraryStrategy::Live(source) => {
                match generate_live(source.as_ref(), &request).await {
                    Ok(value) => Ok(Itinerary::Live(value)),
                    Err(failure) => {
                        error!(
                            target: "itinerary",
                            error = %failure,
                            kind = failure.kind(),
                            destination = %request.destination,
                            "itinerary generation failed"
                        );
                        Err(AppError::from(failure))
                    }
                }
            }
        }
    }
}

async fn generate_live(
    source: &dyn CompletionSource,
    request: &ItineraryRequest,
) -> Result<Value, UpstreamFailure> {
    let payload = build_completion_request(request);
    let response = source.complete(&payload).await?;

    serde_json::from_str::<Value>(completion_content(&response))
        .map_err(|err| UpstreamFailure::Completion(err.to_string()))
}
