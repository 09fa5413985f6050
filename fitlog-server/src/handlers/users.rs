//! User handlers

use super::DataResponse;
use crate::error::{encoding, upstream, ApiError, ValidJson};
use crate::state::Store;
use axum::Json;
use fitlog_core::{store::to_row, NewUser, Table};

/// Insert a user and relay the stored row(s)
pub async fn create_user(
    Store(store): Store,
    ValidJson(user): ValidJson<NewUser>,
) -> Result<Json<DataResponse>, ApiError> {
    let row = to_row(&user).map_err(encoding("user"))?;
    let data = store
        .insert(Table::Users, row)
        .await
        .map_err(upstream("creating user"))?;

    tracing::info!(rows = data.len(), "created user");
    Ok(Json(DataResponse { data }))
}

/// List every user
pub async fn list_users(Store(store): Store) -> Result<Json<DataResponse>, ApiError> {
    let data = store
        .select_all(Table::Users)
        .await
        .map_err(upstream("fetching users"))?;
    Ok(Json(DataResponse { data }))
}
