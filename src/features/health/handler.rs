use axum::Json;
use serde_json::{Value, json};

pub async fn handle_healthcheck() -> Json<Value> {
    Json(json!({ "ok": true, "msg": "AI Travel Planner backend running" }))
}
