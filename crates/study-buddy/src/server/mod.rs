use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tracing::info;

use crate::server::endpoints::{schedule, status, students};
use crate::types::AppState;

mod endpoints;
mod types;

/// Builds the HTTP API over a shared roster.
///
/// Students are registered under `/students` and edited through their
/// `courses`, `availability` and `matches` sub-routes. Sessions are booked and
/// listed at `/sessions`; `/health` reports roster counts.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let student_router = Router::new()
        .route("/students", post(students::post_student))
        .route("/students/:id", get(students::get_profile))
        .route("/students/:id/courses", post(students::post_course))
        .route("/students/:id/availability", post(students::post_availability))
        .route(
            "/students/:id/availability/:position",
            delete(students::delete_availability),
        )
        .route("/students/:id/matches", get(students::get_matches));

    let session_router = Router::new().route(
        "/sessions",
        get(schedule::get_sessions).post(schedule::post_session),
    );

    Router::new()
        .route("/health", get(status::get_health))
        .merge(student_router)
        .merge(session_router)
        .with_state(app_state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(app_state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = app_state.config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, create_router(app_state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
