use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user-entered record against one exercise.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExerciseLog {
    pub id: String,
    pub exercise_id: String,
    pub weight: Option<f64>,
    pub reps: Option<i64>,
    pub completed: bool,
    pub logged_at: DateTime<Utc>,
    pub notes: Option<String>,
}
