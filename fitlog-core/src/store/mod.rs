//! Table-store abstraction over the hosted database API

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::error::{StoreError, StoreResult};
use crate::types::Row;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Tables exposed by the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Workouts,
}

impl Table {
    /// Name of the table on the remote side
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Workouts => "workouts",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract table store
///
/// Implementations must be safe to share across concurrent requests. Neither
/// operation is retried by callers.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Insert one row, returning the row(s) as stored
    async fn insert(&self, table: Table, row: Row) -> StoreResult<Vec<Row>>;

    /// Fetch every row of a table in store order
    async fn select_all(&self, table: Table) -> StoreResult<Vec<Row>>;
}

/// Convert a record into a row for insertion
pub fn to_row<T: Serialize>(record: &T) -> StoreResult<Row> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(row)) => Ok(row),
        Ok(other) => Err(StoreError::Encode(format!(
            "record is not an object: {}",
            other
        ))),
        Err(e) => Err(StoreError::Encode(e.to_string())),
    }
}
