//! Workout summary handler

use crate::error::{upstream, ApiError};
use crate::state::Store;
use axum::Json;
use fitlog_core::{summarize, Summary, Table};

/// Summarize the whole workouts table
pub async fn workout_summary(Store(store): Store) -> Result<Json<Summary>, ApiError> {
    let workouts = store
        .select_all(Table::Workouts)
        .await
        .map_err(upstream("generating summary"))?;

    Ok(Json(summarize(&workouts)))
}
