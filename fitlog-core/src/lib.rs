//! Fitlog Core Library
//!
//! This crate provides the record types, the remote table-store client and the
//! workout summary logic for the Fitlog service. All durable state lives in the
//! hosted table API; this crate only shapes requests to it and reads its rows.

pub mod error;
pub mod store;
pub mod summary;
pub mod types;

pub use error::{StoreError, StoreResult, TimestampError};
pub use store::{MemoryStore, RestStore, Table, TableStore};
pub use summary::{summarize, MostRecentWorkout, Summary, WorkoutReport};
pub use types::{NewUser, NewWorkout, Row, WorkoutTimestamp};
