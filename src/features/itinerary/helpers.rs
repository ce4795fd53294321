use serde_json::Value;

use crate::core::error::AppError;
use crate::features::itinerary::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ItineraryRequest,
};

pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";
pub const COMPLETION_TEMPERATURE: f64 = 0.6;
pub const SYSTEM_PROMPT: &str = "You are a travel planner. Return ONLY valid JSON itinerary.";

const REQUIRED_FIELDS: [&str; 3] = ["destination", "startDate", "endDate"];

/// Reads the loosely typed request body. Required fields must be present and
/// truthy and are kept as sent; absent optional ones become an empty string.
pub fn parse_itinerary_request(payload: &Value) -> Result<ItineraryRequest, AppError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !payload.get(*field).is_some_and(is_truthy))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::missing_field(missing));
    }

    Ok(ItineraryRequest {
        destination: required_value(payload, "destination"),
        start_date: required_value(payload, "startDate"),
        end_date: required_value(payload, "endDate"),
        interests: optional_text(payload, "interests"),
        budget: optional_text(payload, "budget"),
    })
}

pub fn build_user_prompt(request: &ItineraryRequest) -> String {
    format!(
        "Destination: {}, Start: {}, End: {}, Interests: {}, Budget: {}",
        display_text(&request.destination),
        display_text(&request.start_date),
        display_text(&request.end_date),
        request.interests,
        request.budget
    )
}

pub fn build_completion_request(request: &ItineraryRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: COMPLETION_MODEL.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: build_user_prompt(request),
            },
        ],
        temperature: COMPLETION_TEMPERATURE,
    }
}

/// Text of the first choice, or an empty string when the response has none.
pub fn completion_content(response: &ChatCompletionResponse) -> &str {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.as_ref())
        .and_then(|message| message.content.as_deref())
        .unwrap_or("")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a JSON value the way it reads when interpolated into text: arrays
/// join their elements with commas, `null` array elements vanish.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(n), _, _) => n.to_string(),
            (_, Some(n), _) => n.to_string(),
            (_, _, Some(n)) => n.to_string(),
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn required_value(payload: &Value, key: &str) -> Value {
    payload.get(key).cloned().unwrap_or(Value::Null)
}

fn optional_text(payload: &Value, key: &str) -> String {
    payload.get(key).map(display_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::features::itinerary::dto::{CompletionChoice, CompletionMessage};

    #[test]
    fn reports_every_missing_required_field() {
        let error = parse_itinerary_request(&json!({ "startDate": "" })).unwrap_err();
        match error {
            AppError::MissingField { missing } => {
                assert_eq!(missing, vec!["destination", "startDate", "endDate"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absent_optional_fields_default_to_empty() {
        let request = parse_itinerary_request(&json!({
            "destination": "Lisbon",
            "startDate": "2025-05-01",
            "endDate": "2025-05-04"
        }))
        .expect("valid request");

        assert_eq!(request.interests, "");
        assert_eq!(request.budget, "");
        assert_eq!(
            build_user_prompt(&request),
            "Destination: Lisbon, Start: 2025-05-01, End: 2025-05-04, Interests: , Budget: "
        );
    }

    #[test]
    fn explicit_null_optional_field_is_rendered() {
        let request = parse_itinerary_request(&json!({
            "destination": "Lisbon",
            "startDate": "2025-05-01",
            "endDate": "2025-05-04",
            "budget": null
        }))
        .expect("valid request");

        assert_eq!(request.budget, "null");
        assert!(build_user_prompt(&request).ends_with("Budget: null"));
    }

    #[test]
    fn prompt_renders_non_string_values_as_text() {
        let request = parse_itinerary_request(&json!({
            "destination": { "city": "Rome" },
            "startDate": 20250601,
            "endDate": 1.5,
            "interests": ["food", null, "art"],
            "budget": true
        }))
        .expect("valid request");

        assert_eq!(request.start_date, json!(20250601));
        assert_eq!(
            build_user_prompt(&request),
            "Destination: [object Object], Start: 20250601, End: 1.5, Interests: food,,art, Budget: true"
        );
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            let payload = json!({
                "destination": value,
                "startDate": "2025-06-01",
                "endDate": "2025-06-03"
            });
            assert!(matches!(
                parse_itinerary_request(&payload),
                Err(AppError::MissingField { .. })
            ));
        }
    }

    #[test]
    fn completion_content_defaults_to_empty() {
        assert_eq!(completion_content(&ChatCompletionResponse::default()), "");

        let response = ChatCompletionResponse {
            choices: vec![CompletionChoice {
                message: Some(CompletionMessage {
                    content: Some("{\"title\":\"X\"}".to_string()),
                }),
            }],
        };
        assert_eq!(completion_content(&response), "{\"title\":\"X\"}");
    }
}
