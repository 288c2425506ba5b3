use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One weekday entry of a program. Natural key: `(program_id, day_name)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgramDay {
    pub id: String,
    pub program_id: String,
    /// Weekday name, e.g. `Monday`.
    pub day_name: String,
    pub date: Option<String>,
    pub day_title: Option<String>,
    pub coach_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
