use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood/:mood", post(handlers::log_mood_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/mood", post(handlers::log_mood))
        .route("/api/timeline", get(handlers::get_timeline))
        .route("/api/calendar", get(handlers::get_calendar))
        .with_state(state)
}
