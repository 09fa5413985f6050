//! Workout summary over a full table scan

use crate::types::Row;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

/// Message returned in place of a report when there are no workouts
pub const NO_WORKOUTS: &str = "No workouts found.";

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// Result of summarizing the workouts table
///
/// Serializes to either `{"summary": "No workouts found."}` or the report
/// shape, so callers must handle both.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    Empty,
    Report(WorkoutReport),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WorkoutReport {
    pub total_workouts: usize,
    pub most_recent_workout: MostRecentWorkout,
    pub favorite_workout_type: Value,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MostRecentWorkout {
    pub name: Value,
    pub date: Value,
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Summary::Empty => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("summary", NO_WORKOUTS)?;
                map.end()
            }
            Summary::Report(report) => report.serialize(serializer),
        }
    }
}

/// Summarize workout rows in arrival order
pub fn summarize(rows: &[Row]) -> Summary {
    let Some(latest) = most_recent(rows) else {
        return Summary::Empty;
    };

    let field_or_unknown = |field: &str| {
        latest
            .get(field)
            .cloned()
            .unwrap_or_else(|| Value::String(UNKNOWN.to_string()))
    };

    Summary::Report(WorkoutReport {
        total_workouts: rows.len(),
        most_recent_workout: MostRecentWorkout {
            name: field_or_unknown("name"),
            date: field_or_unknown("date"),
        },
        favorite_workout_type: favorite_name(rows)
            .unwrap_or_else(|| Value::String(NOT_AVAILABLE.to_string())),
    })
}

/// Sort key for the `date` field: strings as-is, other values by JSON text.
/// A missing or null date has no key and sorts below every dated row.
fn date_key(row: &Row) -> Option<Cow<'_, str>> {
    row.get("date").filter(|v| !v.is_null()).map(|value| match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    })
}

/// Row with the greatest date; the first one wins a tie
fn most_recent(rows: &[Row]) -> Option<&Row> {
    let mut rows = rows.iter();
    let mut best = rows.next()?;
    let mut best_key = date_key(best);

    for row in rows {
        let key = date_key(row);
        if key > best_key {
            best = row;
            best_key = key;
        }
    }

    Some(best)
}

/// Most frequent `name`; ties go to the value seen first
fn favorite_name(rows: &[Row]) -> Option<Value> {
    // key -> (first position, count)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut values: Vec<&Value> = Vec::new();

    for name in rows.iter().filter_map(|row| row.get("name")) {
        let position = values.len();
        let entry = counts.entry(name.to_string()).or_insert_with(|| {
            values.push(name);
            (position, 0)
        });
        entry.1 += 1;
    }

    counts
        .into_values()
        .max_by(|(pos_a, count_a), (pos_b, count_b)| {
            count_a.cmp(count_b).then_with(|| pos_b.cmp(pos_a))
        })
        .map(|(position, _)| values[position].clone())
}
