//! Scatter plot handler.

use axum::{
    Json,
    extract::{Query, State},
};
use evdash::{ChartSpec, XAxis};
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query string for the scatter endpoint.
#[derive(Deserialize)]
pub struct ScatterQuery {
    /// X-axis column name; defaults to `Population`.
    pub x: Option<String>,
}

/// GET /api/scatter?x=<column>
pub async fn get_scatter(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let x_axis = query
        .x
        .unwrap_or_else(|| XAxis::default().value().to_string());
    let chart = state.context.scatter(&x_axis)?;
    Ok(Json(chart))
}
