use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::itinerary::dto::Itinerary;
use crate::features::itinerary::helpers::parse_itinerary_request;
use crate::server::AppState;

pub async fn handle_generate_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Itinerary>, AppError> {
    // An unreadable body validates like an empty one.
    let payload = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!(target: "itinerary", %rejection, "request body is not JSON");
            Value::Object(Default::default())
        }
    };

    let request = parse_itinerary_request(&payload).inspect_err(|err| {
        if let AppError::MissingField { missing } = err {
            debug!(target: "itinerary", ?missing, "rejecting itinerary request");
        }
    })?;

    let itinerary = state.service.generate(request).await?;
    Ok(Json(itinerary))
}
