//! Request handlers

mod summary;
mod users;
mod workouts;

pub use summary::*;
pub use users::*;
pub use workouts::*;

use axum::Json;
use fitlog_core::Row;
use serde::Serialize;

/// Liveness response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Rows relayed from the table store
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: Vec<Row>,
}

/// Liveness endpoint; never touches the store
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Fitlog API is running",
    })
}
