//! Per-state statistics handler.

use axum::{
    Json,
    extract::{Path, State},
};
use evdash::StateStats;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// GET /api/states/:state
pub async fn get_state_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StateStats>, ApiError> {
    let stats = state.context.state_stats(&name)?;
    Ok(Json(stats))
}
