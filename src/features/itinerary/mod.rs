pub mod client;
pub mod dto;
pub mod handler;
pub mod helpers;
pub mod mock;
pub mod service;

#[allow(unused_imports)]
pub use dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionChoice,
    CompletionMessage, DayPlan, Itinerary, ItineraryDocument, ItineraryRequest,
};
pub use client::OpenAiClient;
pub use handler::handle_generate_itinerary;
pub use service::{CompletionSource, ItineraryService, ItineraryStrategy};
