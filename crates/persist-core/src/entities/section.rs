use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A labeled phase of a day's workout (warm-up, main work, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkoutSection {
    pub id: String,
    pub day_id: String,
    pub section_type: String,
    pub section_letter: Option<String>,
    pub order_index: u32,
    pub duration: Option<String>,
    pub format_type: Option<String>,
    pub format_structure: Option<String>,
    pub format_interval_seconds: Option<i64>,
    pub format_total_sets: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutSection {
    /// Display label: `"A - Main Work"` when a letter exists, else the type.
    #[must_use]
    pub fn label(&self) -> String {
        match self.section_letter.as_deref() {
            Some(letter) if !letter.is_empty() => format!("{letter} - {}", self.section_type),
            _ => self.section_type.clone(),
        }
    }
}
