//! Completion progress for one program day.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ExerciseLog;
use crate::responses::DayWorkout;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionProgress {
    pub section_id: String,
    /// `"<letter> - <type>"`, or the type alone.
    pub section_name: String,
    pub total_exercises: u32,
    pub completed_exercises: u32,
    pub completion_percentage: u32,
}

/// Response from `persist day progress`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct WorkoutProgress {
    pub total_exercises: u32,
    pub completed_exercises: u32,
    pub completion_percentage: u32,
    pub section_progress: Vec<SectionProgress>,
}

/// Whole-number percentage, rounded half up. Zero when `total` is zero.
#[must_use]
pub fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // completed <= total, so the result fits in 0..=100.
    let pct = (f64::from(completed) / f64::from(total) * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = pct as u32;
    pct
}

/// Tally completed exercises per section.
///
/// An exercise counts as completed when any of its logs is marked completed.
#[must_use]
pub fn workout_progress(workout: &DayWorkout, logs: &[ExerciseLog]) -> WorkoutProgress {
    let completed: HashSet<&str> = logs
        .iter()
        .filter(|log| log.completed)
        .map(|log| log.exercise_id.as_str())
        .collect();

    let mut progress = WorkoutProgress::default();
    for section in &workout.sections {
        let mut total = 0u32;
        let mut done = 0u32;
        for exercise in section.components.iter().flat_map(|c| &c.exercises) {
            total += 1;
            if completed.contains(exercise.id.as_str()) {
                done += 1;
            }
        }
        progress.total_exercises += total;
        progress.completed_exercises += done;
        progress.section_progress.push(SectionProgress {
            section_id: section.section.id.clone(),
            section_name: section.section.label(),
            total_exercises: total,
            completed_exercises: done,
            completion_percentage: percentage(done, total),
        });
    }
    progress.completion_percentage =
        percentage(progress.completed_exercises, progress.total_exercises);
    progress
}
