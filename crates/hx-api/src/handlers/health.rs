use axum::Json;
use serde_json::json;

use crate::error::ApiError;

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Hirex Matching API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Suggest job matches for candidate profiles using weighted heuristic scoring",
        "health": "/health",
    }))
}

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("route not found".into())
}
