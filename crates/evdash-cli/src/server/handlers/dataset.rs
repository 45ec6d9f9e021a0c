//! Controls and dataset summary handlers.

use axum::{Json, extract::State};
use evdash::{Controls, DatasetSummary};

use crate::server::state::AppState;

/// GET /api/controls
pub async fn get_controls(State(state): State<AppState>) -> Json<Controls> {
    Json(state.context.controls())
}

/// GET /api/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<DatasetSummary> {
    Json(state.context.summary())
}
