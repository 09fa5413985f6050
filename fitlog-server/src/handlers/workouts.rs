//! Workout handlers

use super::DataResponse;
use crate::error::{encoding, upstream, ApiError, ValidJson};
use crate::state::Store;
use axum::Json;
use fitlog_core::{store::to_row, NewWorkout, Table};

/// Insert a workout; its date is already canonical after extraction
pub async fn create_workout(
    Store(store): Store,
    ValidJson(workout): ValidJson<NewWorkout>,
) -> Result<Json<DataResponse>, ApiError> {
    let row = to_row(&workout).map_err(encoding("workout"))?;
    let data = store
        .insert(Table::Workouts, row)
        .await
        .map_err(upstream("creating workout"))?;

    tracing::info!(date = %workout.date, rows = data.len(), "created workout");
    Ok(Json(DataResponse { data }))
}

/// List every workout
pub async fn list_workouts(Store(store): Store) -> Result<Json<DataResponse>, ApiError> {
    let data = store
        .select_all(Table::Workouts)
        .await
        .map_err(upstream("fetching workouts"))?;
    Ok(Json(DataResponse { data }))
}
