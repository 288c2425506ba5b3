use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ComponentType;

/// A grouping of exercises within a section sharing a training pattern.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkoutComponent {
    pub id: String,
    pub section_id: String,
    /// Stored verbatim; see [`WorkoutComponent::kind`] for the known tags.
    pub component_type: String,
    pub order_index: u32,
    pub rounds: Option<i64>,
    pub transition: Option<String>,
    pub loading_note: Option<String>,
    pub progression_note: Option<String>,
    pub intention_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutComponent {
    #[must_use]
    pub fn kind(&self) -> Option<ComponentType> {
        ComponentType::parse(&self.component_type)
    }
}
