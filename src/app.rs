use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/chores/:id/toggle", post(handlers::toggle_chore_form))
        .route("/celebration/dismiss", post(handlers::dismiss_celebration_form))
        .route("/api/tracker", get(handlers::get_tracker))
        .route("/api/chores/:id/toggle", post(handlers::toggle_chore))
        .route("/api/celebration/dismiss", post(handlers::dismiss_celebration))
        .with_state(state)
}
