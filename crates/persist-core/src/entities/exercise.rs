use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single named movement with its prescription.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub component_id: String,
    pub name: String,
    pub order_index: u32,
    /// Display prescription, e.g. `3 × 8 @2011 RPE8`.
    pub sets_reps: Option<String>,
    pub tempo: Option<String>,
    pub rpe: Option<String>,
    pub duration: Option<String>,
    pub rest_after: Option<String>,
    pub track_weight: bool,
    pub alternatives: Option<Vec<String>>,
    pub loading_note: Option<String>,
    pub progression_note: Option<String>,
    pub notes: Option<String>,
    /// Populated from the working set of a structured sets breakdown.
    pub set_type: Option<String>,
    pub set_number: Option<i64>,
    pub set_range: Option<String>,
    pub created_at: DateTime<Utc>,
}
