use crate::cues::{Cue, CueEvent};
use crate::errors::AppError;
use crate::models::{ToggleResponse, TrackerView};
use crate::state::AppState;
use crate::tracker::today_local;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = current_view(&state).await;
    Html(render_index(&view))
}

pub async fn get_tracker(State(state): State<AppState>) -> Json<TrackerView> {
    Json(current_view(&state).await)
}

pub async fn toggle_chore(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ToggleResponse>, AppError> {
    let response = apply_toggle(&state, id).await?;
    Ok(Json(response))
}

pub async fn toggle_chore_form(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Redirect, AppError> {
    apply_toggle(&state, id).await?;
    Ok(Redirect::to("/"))
}

pub async fn dismiss_celebration(State(state): State<AppState>) -> Json<TrackerView> {
    Json(apply_dismiss(&state).await)
}

pub async fn dismiss_celebration_form(State(state): State<AppState>) -> Redirect {
    apply_dismiss(&state).await;
    Redirect::to("/")
}

// Every request first retries a failed load and rolls the day over if needed.
async fn current_view(state: &AppState) -> TrackerView {
    let today = today_local();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh(state.store.as_ref(), today).await;
    tracker.view(today)
}

async fn apply_toggle(state: &AppState, id: u32) -> Result<ToggleResponse, AppError> {
    let today = today_local();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh(state.store.as_ref(), today).await;

    let mut cues: Vec<Cue> = Vec::new();
    let completed = tracker
        .toggle(id, &mut cues)
        .ok_or_else(|| AppError::not_found(format!("no chore with id {id}")))?;
    tracker.save_on_change(state.store.as_ref()).await;

    Ok(ToggleResponse {
        completed,
        cues: cues.into_iter().map(CueEvent::from).collect(),
        view: tracker.view(today),
    })
}

async fn apply_dismiss(state: &AppState) -> TrackerView {
    let today = today_local();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh(state.store.as_ref(), today).await;
    tracker.dismiss_celebration();
    tracker.view(today)
}
