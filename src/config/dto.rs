use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    /// Absent when no usable key is set; the server then serves mock itineraries.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub disable_proxy: bool,
}
