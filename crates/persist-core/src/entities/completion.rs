use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marks a whole program day as done. At most one per day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkoutCompletion {
    pub id: String,
    pub day_id: String,
    pub completed_at: DateTime<Utc>,
    pub total_exercises: Option<i64>,
    pub completed_exercises: Option<i64>,
    pub notes: Option<String>,
}
