use crate::calendar::build_month;
use crate::errors::AppError;
use crate::models::{CalendarQuery, CalendarResponse, MoodRequest, TimelineResponse, TodayResponse};
use crate::record::{date_key, record_mood, today};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::timeline::build_timeline;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::Datelike;

const MAX_MOOD_LEN: usize = 64;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = date_key(today());
    let data = state.data.lock().await;
    Html(render_index(&date, data.mood_for(&date)))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let date = date_key(today());
    let data = state.data.lock().await;
    let mood = data.mood_for(&date).map(str::to_string);

    Ok(Json(TodayResponse { date, mood }))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let mood = validate_mood(&payload.mood)?;
    let response = apply_mood(&state, mood).await?;
    Ok(Json(response))
}

/// Form fallback for the mood buttons; lands back on the page.
pub async fn log_mood_form(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> Result<Redirect, AppError> {
    let mood = validate_mood(&mood)?;
    apply_mood(&state, mood).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_timeline(
    State(state): State<AppState>,
) -> Result<Json<TimelineResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_timeline(&data)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let now = today();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());

    let data = state.data.lock().await;
    build_month(year, month, state.week_start, &data)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("year/month is not a calendar month"))
}

fn validate_mood(raw: &str) -> Result<&str, AppError> {
    let mood = raw.trim();
    if mood.is_empty() {
        return Err(AppError::bad_request("mood label must not be empty"));
    }
    if mood.len() > MAX_MOOD_LEN {
        return Err(AppError::bad_request("mood label is too long"));
    }
    Ok(mood)
}

async fn apply_mood(state: &AppState, mood: &str) -> Result<TodayResponse, AppError> {
    let mut data = state.data.lock().await;
    let entry = record_mood(&mut data, today(), mood);

    persist_data(&state.data_path, &data).await?;

    Ok(TodayResponse {
        date: entry.date,
        mood: Some(entry.mood),
    })
}
