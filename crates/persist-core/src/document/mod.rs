//! Typed import document.
//!
//! Import files are produced by an external extraction step and arrive as a
//! JSON array whose first element describes one week:
//!
//! ```text
//! [{ source_file, week_info?, programs: { <name>: { full_name, days: { <weekday>: {
//!     date, day_title, coach_notes?, sections: [ { section_type, ...,
//!         components: [ { type, exercise?, exercises?[] } ]   (nested shape)
//!         exercises: [ ... ]                                  (flat shape)
//! } } } } }]
//! ```
//!
//! [`WorkoutDocument::from_value`] decodes the raw value once at the boundary;
//! everything downstream works on these types instead of probing fields.

pub mod lenient;

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use lenient::{NamedMap, Scalar};

/// The `set_type` that marks the set defining an exercise's prescription.
pub const WORKING_SET: &str = "working";

/// Errors from decoding an import document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("JSON must be an array with at least one object")]
    NotAnArray,

    #[error("Invalid workout document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One week of workout plans: the first element of an import file.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct WorkoutDocument {
    #[serde(deserialize_with = "lenient::text")]
    #[schemars(with = "Scalar")]
    pub source_file: String,
    #[serde(default)]
    pub week_info: Option<WeekInfo>,
    /// Programs keyed by their natural-key name, in document order.
    #[serde(deserialize_with = "lenient::ordered_map")]
    #[schemars(with = "NamedMap<ProgramDoc>")]
    pub programs: Vec<(String, ProgramDoc)>,
}

impl WorkoutDocument {
    /// Decode the first element of an import file.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NotAnArray` when the value is not a non-empty
    /// array, and `DocumentError::Decode` when the first element does not match
    /// the document shape.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let first = value
            .as_array()
            .and_then(|items| items.first())
            .ok_or(DocumentError::NotAnArray)?;
        Ok(Self::deserialize(first)?)
    }

    /// Parse raw JSON text and decode it.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` when the text is not JSON or does not decode.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Total number of exercises that an import would write.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.programs
            .iter()
            .flat_map(|(_, program)| &program.days)
            .flat_map(|(_, day)| &day.sections)
            .map(|section| section.body.exercise_count())
            .sum()
    }
}

/// Week metadata echoed onto every imported program.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, JsonSchema)]
pub struct WeekInfo {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub week_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct ProgramDoc {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub full_name: Option<String>,
    /// Days keyed by weekday name, in document order.
    #[serde(deserialize_with = "lenient::ordered_map")]
    #[schemars(with = "NamedMap<DayDoc>")]
    pub days: Vec<(String, DayDoc)>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct DayDoc {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub day_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub coach_notes: Option<String>,
    /// A missing or non-array `sections` decodes as empty (a validator warning).
    #[serde(default, deserialize_with = "lenient::seq_or_empty")]
    pub sections: Vec<SectionDoc>,
}

/// Section timing format (`format: { type, structure, interval_seconds, total_sets }`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, JsonSchema)]
pub struct FormatDoc {
    #[serde(default, rename = "type", deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub format_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub structure: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    #[schemars(with = "Option<Scalar>")]
    pub interval_seconds: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    #[schemars(with = "Option<Scalar>")]
    pub total_sets: Option<i64>,
}

/// How a section carries its exercises. Detected per section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// Neither `components` nor `exercises`.
    Empty,
    /// Exercises attached directly to the section.
    Flat(Vec<ExerciseDoc>),
    /// Exercises grouped into components. Wins when both keys are present.
    Nested(Vec<ComponentDoc>),
}

impl SectionBody {
    #[must_use]
    pub fn component_count(&self) -> usize {
        match self {
            Self::Nested(components) => components.len(),
            Self::Empty | Self::Flat(_) => 0,
        }
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Flat(exercises) => exercises.len(),
            Self::Nested(components) => components.iter().map(ComponentDoc::exercise_count).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSection")]
pub struct SectionDoc {
    pub section_type: String,
    pub section_letter: Option<String>,
    pub duration: Option<String>,
    pub format: Option<FormatDoc>,
    pub body: SectionBody,
}

impl JsonSchema for SectionDoc {
    fn schema_name() -> Cow<'static, str> {
        "SectionDoc".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        RawSection::json_schema(generator)
    }
}

/// Wire shape of a section before the body is classified.
#[derive(Debug, Deserialize, JsonSchema)]
struct RawSection {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    section_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    section_letter: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    duration: Option<String>,
    #[serde(default)]
    format: Option<FormatDoc>,
    #[serde(default)]
    components: Option<Vec<ComponentDoc>>,
    #[serde(default)]
    exercises: Option<Vec<ExerciseDoc>>,
}

impl From<RawSection> for SectionDoc {
    fn from(raw: RawSection) -> Self {
        let body = match (raw.components, raw.exercises) {
            (Some(components), _) => SectionBody::Nested(components),
            (None, Some(exercises)) => SectionBody::Flat(exercises),
            (None, None) => SectionBody::Empty,
        };
        Self {
            section_type: raw.section_type.unwrap_or_default(),
            section_letter: raw.section_letter,
            duration: raw.duration,
            format: raw.format,
            body,
        }
    }
}

fn default_component_type() -> String {
    crate::enums::ComponentType::SingleExercise.as_str().to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct ComponentDoc {
    #[serde(rename = "type", default = "default_component_type", deserialize_with = "lenient::text")]
    #[schemars(with = "Scalar")]
    pub component_type: String,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    #[schemars(with = "Option<Scalar>")]
    pub rounds: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub transition: Option<String>,
    #[serde(default, alias = "loading", deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub loading_note: Option<String>,
    #[serde(default, alias = "progression", deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub progression_note: Option<String>,
    #[serde(default, alias = "intention", deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub intention_note: Option<String>,
    /// A single embedded exercise (single-lift style components).
    #[serde(default)]
    pub exercise: Option<ExerciseDoc>,
    #[serde(default)]
    pub exercises: Option<Vec<ExerciseDoc>>,
}

/// An exercise with its resolved position inside a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedExercise<'a> {
    pub order_index: u32,
    pub exercise: &'a ExerciseDoc,
}

impl ComponentDoc {
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        usize::from(self.exercise.is_some()) + self.exercises.as_ref().map_or(0, Vec::len)
    }

    /// Resolve the component's exercise list.
    ///
    /// The embedded single exercise comes first at order 0, followed by the
    /// `exercises` array. Both contribute when both are present. An explicit
    /// `order` on an array entry wins over its position in the resolved list.
    #[must_use]
    pub fn resolved_exercises(&self) -> Vec<ResolvedExercise<'_>> {
        let mut resolved = Vec::with_capacity(self.exercise_count());
        if let Some(single) = &self.exercise {
            resolved.push(ResolvedExercise {
                order_index: 0,
                exercise: single,
            });
        }
        for exercise in self.exercises.iter().flatten() {
            let position = u32::try_from(resolved.len()).unwrap_or(u32::MAX);
            resolved.push(ResolvedExercise {
                order_index: exercise.explicit_order().unwrap_or(position),
                exercise,
            });
        }
        resolved
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct ExerciseDoc {
    #[serde(deserialize_with = "lenient::text")]
    #[schemars(with = "Scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    #[schemars(with = "Option<Scalar>")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub sets_reps: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub tempo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub rpe: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub rest_after: Option<String>,
    #[serde(default)]
    pub track_weight: Option<bool>,
    #[serde(default)]
    pub alternatives: Option<Vec<String>>,
    #[serde(default, alias = "loading", deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub loading_note: Option<String>,
    #[serde(default, alias = "progression", deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub progression_note: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub notes: Option<String>,
    /// Structured sets breakdown, used when no literal `sets_reps` is given.
    #[serde(default)]
    pub sets: Option<Vec<SetDoc>>,
}

impl ExerciseDoc {
    fn explicit_order(&self) -> Option<u32> {
        self.order.and_then(|order| u32::try_from(order).ok())
    }

    /// The first set flagged as a working set.
    #[must_use]
    pub fn working_set(&self) -> Option<&SetDoc> {
        self.sets
            .iter()
            .flatten()
            .find(|set| set.set_type.as_deref() == Some(WORKING_SET))
    }

    /// Display prescription: the literal `sets_reps`, else the working set's
    /// derived string.
    #[must_use]
    pub fn display_sets_reps(&self) -> Option<String> {
        match self.sets_reps.as_deref() {
            Some(literal) if !literal.trim().is_empty() => Some(literal.to_string()),
            _ => self.working_set().and_then(SetDoc::display),
        }
    }

    /// Weight tracking defaults to on.
    #[must_use]
    pub fn tracks_weight(&self) -> bool {
        self.track_weight.unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, JsonSchema)]
pub struct SetDoc {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub set_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    #[schemars(with = "Option<Scalar>")]
    pub set_number: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub range: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub reps: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub tempo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    #[schemars(with = "Option<Scalar>")]
    pub rpe: Option<String>,
}

impl SetDoc {
    /// Format as `"<range> × <reps> @<tempo> RPE<rpe>"`, omitting absent parts.
    ///
    /// Returns `None` when the set carries none of the four fields.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        let present = |field: &Option<String>| {
            field
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let mut parts: Vec<String> = Vec::new();
        match (present(&self.range), present(&self.reps)) {
            (Some(range), Some(reps)) => parts.push(format!("{range} × {reps}")),
            (Some(single), None) | (None, Some(single)) => parts.push(single),
            (None, None) => {}
        }
        if let Some(tempo) = present(&self.tempo) {
            parts.push(format!("@{tempo}"));
        }
        if let Some(rpe) = present(&self.rpe) {
            parts.push(format!("RPE{rpe}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
