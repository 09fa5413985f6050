//! Workout records

use super::WorkoutTimestamp;
use serde::{Deserialize, Serialize};

/// Body of a create-workout request
///
/// `user_id` refers to a row in the `users` table, but the reference is not
/// checked here. The date is normalized while deserializing, so a value of
/// this type always carries the canonical text form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWorkout {
    pub user_id: String,
    pub name: String,
    pub date: WorkoutTimestamp,
}
