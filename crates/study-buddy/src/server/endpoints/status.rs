use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::types::AppState;

/// GET /health
pub async fn get_health(State(s): State<Arc<AppState>>) -> impl IntoResponse {
    let roster = s.roster();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "students": roster.students().len(),
            "sessions": roster.sessions().len(),
        })),
    )
}
