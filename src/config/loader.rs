use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = match env::var("PORT") {
        Ok(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid PORT: {err}")))?,
        Err(_) => DEFAULT_PORT,
    };

    let openai_api_key = env::var("OPENAI_API_KEY")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    let openai_base_url = env::var("OPENAI_BASE_URL")
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

    let disable_proxy = parse_bool_env("OPENAI_DISABLE_PROXY", false);

    Ok(AppConfig {
        port,
        openai_api_key,
        openai_base_url,
        disable_proxy,
    })
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}
