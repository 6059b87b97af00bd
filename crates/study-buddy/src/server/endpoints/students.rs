//! Endpoints for registering students and editing their profiles.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::roster::{RosterError, TimeSlot};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct NewStudent {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCourse {
    pub course: String,
}

/// Slot fields as typed by the user; parsed and validated by the handler.
#[derive(Debug, Deserialize)]
pub struct SlotFields {
    pub day: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub course: String,
}

/// POST /students
pub async fn post_student(
    State(s): State<Arc<AppState>>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<Response, ApiErrorType> {
    let Json(body) = payload?;
    info!("POST /students (id={})", body.id);

    let mut roster = s.roster();
    let key = roster.add_student(body.id, body.name);
    let profile = roster.students()[key.index()].profile();
    Ok((StatusCode::CREATED, Json(profile)).into_response())
}

/// GET /students/:id
pub async fn get_profile(
    path: Result<Path<i64>, PathRejection>,
    State(s): State<Arc<AppState>>,
) -> Result<Response, ApiErrorType> {
    let Path(id) = path?;
    info!("GET /students/{}", id);

    let roster = s.roster();
    let student = roster
        .find_by_id(id)
        .ok_or(RosterError::StudentNotFound { id })?;
    Ok((StatusCode::OK, Json(student.profile())).into_response())
}

/// POST /students/:id/courses
pub async fn post_course(
    path: Result<Path<i64>, PathRejection>,
    State(s): State<Arc<AppState>>,
    payload: Result<Json<NewCourse>, JsonRejection>,
) -> Result<Response, ApiErrorType> {
    let Path(id) = path?;
    let Json(body) = payload?;
    info!("POST /students/{}/courses", id);

    let mut roster = s.roster();
    let student = roster.student_mut(id)?;
    student.add_course(body.course);
    Ok((StatusCode::OK, Json(student.profile())).into_response())
}

/// POST /students/:id/availability
pub async fn post_availability(
    path: Result<Path<i64>, PathRejection>,
    State(s): State<Arc<AppState>>,
    payload: Result<Json<SlotFields>, JsonRejection>,
) -> Result<Response, ApiErrorType> {
    let Path(id) = path?;
    let Json(body) = payload?;
    info!("POST /students/{}/availability", id);

    let slot = TimeSlot::parse(&body.day, &body.start, &body.end).map_err(|e| {
        warn!("Rejected availability for student {}: {}", id, e);
        e
    })?;

    let mut roster = s.roster();
    let student = roster.student_mut(id)?;
    student.add_availability(slot);
    Ok((StatusCode::OK, Json(student.profile())).into_response())
}

/// DELETE /students/:id/availability/:position
///
/// `position` is the 1-based number shown in the profile. Out-of-range
/// positions are rejected here because the roster itself ignores them.
pub async fn delete_availability(
    path: Result<Path<(i64, usize)>, PathRejection>,
    State(s): State<Arc<AppState>>,
) -> Result<Response, ApiErrorType> {
    let Path((id, position)) = path?;
    info!("DELETE /students/{}/availability/{}", id, position);

    let mut roster = s.roster();
    let student = roster.student_mut(id)?;

    let len = student.availability().len();
    if position < 1 || position > len {
        return Err(ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Invalid availability position",
            Some(format!("expected a number between 1 and {len}, got {position}")),
        )));
    }

    let removed = student.remove_availability(position - 1);
    Ok((
        StatusCode::OK,
        Json(json!({
            "removed": removed,
            "profile": student.profile(),
        })),
    )
        .into_response())
}

/// GET /students/:id/matches?course=...
pub async fn get_matches(
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<MatchQuery>, QueryRejection>,
    State(s): State<Arc<AppState>>,
) -> Result<Response, ApiErrorType> {
    let Path(id) = path?;
    let Query(params) = query?;
    info!("GET /students/{}/matches (course={:?})", id, params.course);

    let roster = s.roster();
    if roster.find_by_id(id).is_none() {
        return Err(RosterError::StudentNotFound { id }.into());
    }

    let response: Vec<_> = roster
        .search_matches(id, &params.course)
        .into_iter()
        .map(|m| json!({ "id": m.id(), "name": m.name() }))
        .collect();

    Ok((StatusCode::OK, Json(response)).into_response())
}
