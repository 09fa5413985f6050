use super::{Table, TableStore};
use crate::error::StoreResult;
use crate::types::Row;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory table store (for testing and credential-less development runs)
///
/// Fills in `id` and `created_at` on insert the way the hosted store's column
/// defaults do. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Table, Vec<Row>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a table pre-populated, rows kept verbatim
    pub fn with_rows(table: Table, rows: Vec<Row>) -> Self {
        let mut tables = HashMap::new();
        tables.insert(table, rows);
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Number of rows currently held in a table
    pub async fn len(&self, table: Table) -> usize {
        self.tables.read().await.get(&table).map_or(0, Vec::len)
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn insert(&self, table: Table, mut row: Row) -> StoreResult<Vec<Row>> {
        row.entry("id")
            .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
        row.entry("created_at")
            .or_insert_with(|| Value::String(chrono::Utc::now().to_rfc3339()));

        self.tables
            .write()
            .await
            .entry(table)
            .or_default()
            .push(row.clone());

        Ok(vec![row])
    }

    async fn select_all(&self, table: Table) -> StoreResult<Vec<Row>> {
        Ok(self
            .tables
            .read()
            .await
            .get(&table)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_select() {
        let store = MemoryStore::new();

        let inserted = store
            .insert(Table::Users, row(json!({"email": "a@b.c", "display_name": "A"})))
            .await
            .unwrap();
        assert_eq!(inserted.len(), 1);
        assert!(inserted[0]["id"].is_string());
        assert!(inserted[0]["created_at"].is_string());

        let users = store.select_all(Table::Users).await.unwrap();
        assert_eq!(users, inserted);
        assert!(store.select_all(Table::Workouts).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_existing_id_kept() {
        let store = MemoryStore::new();
        let inserted = store
            .insert(Table::Workouts, row(json!({"id": 7, "name": "Run"})))
            .await
            .unwrap();
        assert_eq!(inserted[0]["id"], 7);
    }

    #[tokio::test]
    async fn test_seeded_rows_returned_in_order() {
        let store = MemoryStore::with_rows(
            Table::Workouts,
            vec![row(json!({"name": "Run"})), row(json!({"name": "Yoga"}))],
        );
        let rows = store.select_all(Table::Workouts).await.unwrap();
        assert_eq!(rows[0]["name"], "Run");
        assert_eq!(rows[1]["name"], "Yoga");
        assert_eq!(store.len(Table::Workouts).await, 2);
    }
}
