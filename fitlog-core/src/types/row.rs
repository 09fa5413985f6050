//! Untyped rows as returned by the table store

/// A single record: field name to JSON value. No field is guaranteed present.
pub type Row = serde_json::Map<String, serde_json::Value>;
