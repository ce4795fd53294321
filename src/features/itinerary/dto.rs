use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated form of a `POST /api/generate-itinerary` body. The three
/// required fields keep the JSON value the caller sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    pub destination: Value,
    pub start_date: Value,
    pub end_date: Value,
    pub interests: String,
    pub budget: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDocument {
    pub title: String,
    pub destination: Value,
    pub start_date: Value,
    pub end_date: Value,
    pub days: u32,
    pub budget: String,
    pub items: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub date: Value,
    pub highlights: Vec<String>,
    pub meals: Vec<String>,
    pub notes: String,
}

/// Body of a successful generation. Live output is whatever JSON the model
/// produced, so it stays an opaque value.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Itinerary {
    Mock(ItineraryDocument),
    Live(Value),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<CompletionMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}
