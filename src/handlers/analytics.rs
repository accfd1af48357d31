use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::analytics::AnalyticsSummary;
use crate::error::AppError;
use crate::repo::analytics;
use crate::state::AppState;

// GET /api/analytics/summary
#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let summary = analytics::summary(&state.db_pool).await?;
    Ok(Json(summary))
}
