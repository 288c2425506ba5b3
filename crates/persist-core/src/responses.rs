//! Response types returned as JSON by `persist` commands.
//!
//! These structs define the shape of JSON output for `persist validate`,
//! `persist import`, `persist probe`, `persist wipe`, and `persist day show`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Exercise, ProgramDay, WorkoutComponent, WorkoutSection};
use crate::enums::Collection;

/// Week metadata echoed in a validation summary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct WeekInfoSummary {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Counts gathered while validating a document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    pub total_programs: u32,
    pub program_names: Vec<String>,
    pub total_days: u32,
    pub total_sections: u32,
    pub total_components: u32,
    pub total_exercises: u32,
    pub week_info: Option<WeekInfoSummary>,
    pub source_file: Option<String>,
}

/// Response from `persist validate`.
///
/// `is_valid` is true exactly when `errors` is empty. Warnings never
/// invalidate a document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// A failed report carrying a single error and an empty summary.
    #[must_use]
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
            summary: ValidationSummary::default(),
        }
    }
}

/// Rows written by one import run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct ImportStats {
    pub programs: u32,
    pub days: u32,
    pub sections: u32,
    pub components: u32,
    pub exercises: u32,
}

/// Response from `persist import` and `persist probe`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub stats: Option<ImportStats>,
    pub error: Option<String>,
}

impl ImportResult {
    #[must_use]
    pub fn succeeded(message: impl Into<String>, stats: Option<ImportStats>) -> Self {
        Self {
            success: true,
            message: message.into(),
            stats,
            error: None,
        }
    }

    /// A failed result. `stats` carries whatever was written before the abort.
    #[must_use]
    pub fn failed(message: impl Into<String>, error: impl Into<String>, stats: Option<ImportStats>) -> Self {
        Self {
            success: false,
            message: message.into(),
            stats,
            error: Some(error.into()),
        }
    }
}

/// Rows deleted from one collection by a wipe.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionCount {
    pub collection: Collection,
    pub deleted: u64,
}

/// Response from `persist wipe`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct WipeReport {
    pub collections: Vec<CollectionCount>,
}

impl WipeReport {
    #[must_use]
    pub fn total_deleted(&self) -> u64 {
        self.collections.iter().map(|c| c.deleted).sum()
    }
}

/// A component and its exercises, ordered by `order_index`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComponentWorkout {
    pub component: WorkoutComponent,
    pub exercises: Vec<Exercise>,
}

/// A section and its components, ordered by `order_index`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionWorkout {
    pub section: WorkoutSection,
    pub components: Vec<ComponentWorkout>,
}

/// Response from `persist day show`: one day's full tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DayWorkout {
    pub day: ProgramDay,
    pub sections: Vec<SectionWorkout>,
}

impl DayWorkout {
    /// Every exercise of the day in display order.
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.sections
            .iter()
            .flat_map(|s| &s.components)
            .flat_map(|c| &c.exercises)
    }
}
