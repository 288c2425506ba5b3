//! Component types, import levels, collections, and the import workflow status.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ImportStatus` provides `allowed_next_states()` to enforce valid workflow
//! transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// Training pattern shared by the exercises of one component.
///
/// Stored as free text: documents may carry tags outside this list, which are
/// kept verbatim. Use [`ComponentType::parse`] to recognise the known ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    SingleExercise,
    SingleLift,
    Superset,
    Circuit,
    Complex,
}

impl ComponentType {
    pub const ALL: [Self; 5] = [
        Self::SingleExercise,
        Self::SingleLift,
        Self::Superset,
        Self::Circuit,
        Self::Complex,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleExercise => "single_exercise",
            Self::SingleLift => "single_lift",
            Self::Superset => "superset",
            Self::Circuit => "circuit",
            Self::Complex => "complex",
        }
    }

    /// Recognise a stored or document tag. Returns `None` for unknown tags.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ImportLevel
// ---------------------------------------------------------------------------

/// A level of the program → day → section → component → exercise tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImportLevel {
    Program,
    Day,
    Section,
    Component,
    Exercise,
}

impl ImportLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Day => "day",
            Self::Section => "section",
            Self::Component => "component",
            Self::Exercise => "exercise",
        }
    }
}

impl fmt::Display for ImportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// A stored row collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Programs,
    ProgramDays,
    WorkoutSections,
    WorkoutComponents,
    Exercises,
    ExerciseLogs,
    WorkoutCompletions,
}

impl Collection {
    /// Reverse-dependency order: every collection appears before the ones it
    /// references.
    pub const WIPE_ORDER: [Self; 7] = [
        Self::ExerciseLogs,
        Self::WorkoutCompletions,
        Self::Exercises,
        Self::WorkoutComponents,
        Self::WorkoutSections,
        Self::ProgramDays,
        Self::Programs,
    ];

    /// SQL table name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Programs => "programs",
            Self::ProgramDays => "program_days",
            Self::WorkoutSections => "workout_sections",
            Self::WorkoutComponents => "workout_components",
            Self::Exercises => "exercises",
            Self::ExerciseLogs => "exercise_logs",
            Self::WorkoutCompletions => "workout_completions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ImportStatus
// ---------------------------------------------------------------------------

/// Status of the caller-facing import workflow.
///
/// ```text
/// idle → validating → idle | error
/// idle → importing  → success | error
/// success | error → validating (fresh file selection)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    #[default]
    Idle,
    Validating,
    Importing,
    Success,
    Error,
}

impl ImportStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Validating, Self::Importing],
            Self::Validating => &[Self::Idle, Self::Error],
            Self::Importing => &[Self::Success, Self::Error],
            Self::Success | Self::Error => &[Self::Validating],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Importing => "importing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_parse_roundtrip() {
        for t in ComponentType::ALL {
            assert_eq!(ComponentType::parse(t.as_str()), Some(t));
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
        assert_eq!(ComponentType::parse("emom"), None);
    }

    #[test]
    fn import_status_transitions() {
        assert!(ImportStatus::Idle.can_transition_to(ImportStatus::Validating));
        assert!(ImportStatus::Idle.can_transition_to(ImportStatus::Importing));
        assert!(ImportStatus::Validating.can_transition_to(ImportStatus::Error));
        assert!(ImportStatus::Importing.can_transition_to(ImportStatus::Success));
        assert!(ImportStatus::Error.can_transition_to(ImportStatus::Validating));

        assert!(!ImportStatus::Error.can_transition_to(ImportStatus::Importing));
        assert!(!ImportStatus::Success.can_transition_to(ImportStatus::Importing));
        assert!(!ImportStatus::Validating.can_transition_to(ImportStatus::Importing));
    }

    #[test]
    fn wipe_order_ends_with_programs() {
        assert_eq!(Collection::WIPE_ORDER[0], Collection::ExerciseLogs);
        assert_eq!(Collection::WIPE_ORDER[6], Collection::Programs);
    }
}
