use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::roster::{RosterError, SlotError};

/// JSON error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiErrorType {
    #[serde(skip)]
    status: StatusCode,
    error: String,
    details: Option<String>,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, details): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            error: error.to_string(),
            details,
        }
    }
}

impl From<RosterError> for ApiErrorType {
    fn from(err: RosterError) -> Self {
        let (status, message) = match &err {
            RosterError::StudentNotFound { .. } | RosterError::UnknownHandle { .. } => {
                (StatusCode::NOT_FOUND, "Student not found")
            }
            RosterError::Infeasible { .. } => (
                StatusCode::CONFLICT,
                "Students are not available at this proposed time",
            ),
        };
        Self::from((status, message, Some(err.to_string())))
    }
}

impl From<SlotError> for ApiErrorType {
    fn from(err: SlotError) -> Self {
        Self::from((
            StatusCode::BAD_REQUEST,
            "Invalid time slot",
            Some(err.to_string()),
        ))
    }
}

/// Malformed bodies, path segments and query strings all answer 400 with the
/// extractor's own message as details.
macro_rules! bad_request_from_rejection {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for ApiErrorType {
                fn from(rej: $rejection) -> Self {
                    Self::from((
                        StatusCode::BAD_REQUEST,
                        "Invalid request",
                        Some(rej.body_text()),
                    ))
                }
            }
        )+
    };
}

bad_request_from_rejection!(JsonRejection, PathRejection, QueryRejection);

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
