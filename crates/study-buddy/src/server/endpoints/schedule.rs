use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::roster::TimeSlot;
use crate::server::types::ApiErrorType;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct NewSession {
    pub first_id: i64,
    pub second_id: i64,
    pub day: String,
    pub start: String,
    pub end: String,
}

/// POST /sessions
/// Books a session if both students are available at the proposed slot
pub async fn post_session(
    State(s): State<Arc<AppState>>,
    payload: Result<Json<NewSession>, JsonRejection>,
) -> Result<Response, ApiErrorType> {
    let Json(body) = payload?;
    info!("POST /sessions ({} and {})", body.first_id, body.second_id);

    let slot = TimeSlot::parse(&body.day, &body.start, &body.end)?;

    // Check and append under one lock so concurrent bookings cannot interleave.
    let mut roster = s.roster();
    let session = roster
        .schedule_by_ids(body.first_id, body.second_id, slot)
        .map_err(|e| {
            warn!("Failed to schedule session: {}", e);
            e
        })?
        .clone();

    Ok((StatusCode::CREATED, Json(roster.summarize(&session))).into_response())
}

/// GET /sessions
/// Returns every booked session in booking order
pub async fn get_sessions(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /sessions");

    let sessions = s.roster().list_sessions();
    (StatusCode::OK, Json(sessions)).into_response()
}
