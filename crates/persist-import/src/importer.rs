//! Flattens a decoded [`WorkoutDocument`] into rows.
//!
//! Programs and days are upserted by natural key. A day's sections are
//! replaced wholesale on every import, so re-importing the same file leaves
//! the store unchanged apart from generated ids.

use persist_core::document::{
    ComponentDoc, DayDoc, ExerciseDoc, ProgramDoc, SectionBody, SectionDoc, WeekInfo,
    WorkoutDocument,
};
use persist_core::enums::{ComponentType, ImportLevel};
use persist_core::responses::{ImportResult, ImportStats};
use persist_db::error::DatabaseError;
use persist_db::store::{NewComponent, NewDay, NewExercise, NewProgram, NewSection, WorkoutStore};
use tracing::{debug, info, warn};

use crate::error::ImportError;
use crate::policy::{ErrorPolicy, FailureAction};

/// Writes documents through a borrowed [`WorkoutStore`].
pub struct Importer<'a, S> {
    store: &'a S,
    policy: ErrorPolicy,
}

fn position(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

impl<'a, S: WorkoutStore> Importer<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            policy: ErrorPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    /// Import and fold the outcome into an [`ImportResult`].
    pub async fn run(&self, document: &WorkoutDocument) -> ImportResult {
        match self.import(document).await {
            Ok(stats) => ImportResult::succeeded(success_message(&stats), Some(stats)),
            Err(ImportError::Aborted {
                level,
                label,
                diagnostic,
            }) => ImportResult::failed(
                format!("Failed to import {level}: {label}"),
                diagnostic.to_string(),
                None,
            ),
            Err(err) => ImportResult::failed("Import failed", err.to_string(), None),
        }
    }

    /// Import every program of the document.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Aborted` when a write fails at a level whose
    /// policy is [`FailureAction::Abort`]. Rows written before the failure
    /// stay committed.
    pub async fn import(&self, document: &WorkoutDocument) -> Result<ImportStats, ImportError> {
        let mut stats = ImportStats::default();
        let week = document.week_info.clone().unwrap_or_default();

        for (name, program) in &document.programs {
            self.import_program(name, program, &week, &mut stats).await?;
        }

        info!(
            source_file = %document.source_file,
            programs = stats.programs,
            exercises = stats.exercises,
            "import finished"
        );
        Ok(stats)
    }

    /// Decide what a failed write means for the run.
    fn on_failure(
        &self,
        level: ImportLevel,
        label: &str,
        err: &DatabaseError,
    ) -> Result<(), ImportError> {
        match self.policy.action(level) {
            FailureAction::Abort => Err(ImportError::Aborted {
                level,
                label: label.to_string(),
                diagnostic: err.diagnostic(),
            }),
            FailureAction::Skip => {
                warn!(%level, label, error = %err, "skipping entity after write failure");
                Ok(())
            }
        }
    }

    async fn import_program(
        &self,
        name: &str,
        program: &ProgramDoc,
        week: &WeekInfo,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let fields = NewProgram {
            name: name.to_string(),
            full_name: program.full_name.clone().unwrap_or_else(|| name.to_string()),
            week_title: week.week_title.clone(),
            start_date: week.start_date.clone(),
            end_date: week.end_date.clone(),
        };

        let written = match self.store.find_program_by_name(name).await {
            Ok(Some(existing)) => self.store.update_program(&existing.id, &fields).await,
            Ok(None) => self.store.insert_program(&fields).await,
            Err(err) => Err(err),
        };
        let program_id = match written {
            Ok(row) => row.id,
            Err(err) => return self.on_failure(ImportLevel::Program, name, &err),
        };
        stats.programs += 1;
        debug!(program = name, id = %program_id, "program written");

        for (day_name, day) in &program.days {
            let label = format!("{name}/{day_name}");
            self.import_day(&program_id, day_name, day, &label, stats)
                .await?;
        }

        info!(program = name, days = program.days.len(), "program imported");
        Ok(())
    }

    async fn import_day(
        &self,
        program_id: &str,
        day_name: &str,
        day: &DayDoc,
        label: &str,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let fields = NewDay {
            program_id: program_id.to_string(),
            day_name: day_name.to_string(),
            date: day.date.clone(),
            day_title: day.day_title.clone(),
            coach_notes: day.coach_notes.clone(),
        };

        let written = match self.store.find_day(program_id, day_name).await {
            Ok(Some(existing)) => self.store.update_day(&existing.id, &fields).await,
            Ok(None) => self.store.insert_day(&fields).await,
            Err(err) => Err(err),
        };
        let day_id = match written {
            Ok(row) => row.id,
            Err(err) => return self.on_failure(ImportLevel::Day, label, &err),
        };
        stats.days += 1;
        debug!(day = label, id = %day_id, "day written");

        // Children are skipped when the old sections cannot be cleared.
        match self.store.delete_sections_for_day(&day_id).await {
            Ok(removed) => debug!(day = label, removed, "previous sections removed"),
            Err(err) => return self.on_failure(ImportLevel::Day, label, &err),
        }

        for (index, section) in day.sections.iter().enumerate() {
            let section_label = format!("{label}#{}", index + 1);
            self.import_section(&day_id, position(index), section, &section_label, stats)
                .await?;
        }
        Ok(())
    }

    async fn import_section(
        &self,
        day_id: &str,
        order_index: u32,
        section: &SectionDoc,
        label: &str,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let format = section.format.clone().unwrap_or_default();
        let fields = NewSection {
            day_id: day_id.to_string(),
            section_type: section.section_type.clone(),
            section_letter: section.section_letter.clone(),
            order_index,
            duration: section.duration.clone(),
            format_type: format.format_type,
            format_structure: format.structure,
            format_interval_seconds: format.interval_seconds,
            format_total_sets: format.total_sets,
        };

        let section_id = match self.store.insert_section(&fields).await {
            Ok(row) => row.id,
            Err(err) => return self.on_failure(ImportLevel::Section, label, &err),
        };
        stats.sections += 1;
        debug!(section = label, id = %section_id, "section written");

        match &section.body {
            SectionBody::Empty => {}
            SectionBody::Nested(components) => {
                for (index, component) in components.iter().enumerate() {
                    let component_label = format!("{label}.{}", index + 1);
                    self.import_component(
                        &section_id,
                        position(index),
                        component,
                        &component_label,
                        stats,
                    )
                    .await?;
                }
            }
            SectionBody::Flat(exercises) => {
                for (index, exercise) in exercises.iter().enumerate() {
                    let component_label = format!("{label}.{}", index + 1);
                    self.import_implicit_component(
                        &section_id,
                        position(index),
                        exercise,
                        &component_label,
                        stats,
                    )
                    .await?;
                }
            }
        }
        Ok(())
    }

    async fn import_component(
        &self,
        section_id: &str,
        order_index: u32,
        component: &ComponentDoc,
        label: &str,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let fields = NewComponent {
            section_id: section_id.to_string(),
            component_type: component.component_type.clone(),
            order_index,
            rounds: component.rounds,
            transition: component.transition.clone(),
            loading_note: component.loading_note.clone(),
            progression_note: component.progression_note.clone(),
            intention_note: component.intention_note.clone(),
        };
        let Some(component_id) = self.write_component(&fields, label, stats).await? else {
            return Ok(());
        };

        for resolved in component.resolved_exercises() {
            self.import_exercise(&component_id, resolved.order_index, resolved.exercise, stats)
                .await?;
        }
        Ok(())
    }

    /// Wrap one section-level exercise in its own `single_exercise` component.
    ///
    /// Without an explicit `order` the exercise takes its position in the
    /// section, like the component wrapping it.
    async fn import_implicit_component(
        &self,
        section_id: &str,
        order_index: u32,
        exercise: &ExerciseDoc,
        label: &str,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let fields = NewComponent {
            section_id: section_id.to_string(),
            component_type: ComponentType::SingleExercise.as_str().to_string(),
            order_index,
            ..NewComponent::default()
        };
        let Some(component_id) = self.write_component(&fields, label, stats).await? else {
            return Ok(());
        };

        let exercise_order = exercise
            .order
            .and_then(|order| u32::try_from(order).ok())
            .unwrap_or(order_index);
        self.import_exercise(&component_id, exercise_order, exercise, stats)
            .await
    }

    /// `Ok(None)` when the component was skipped.
    async fn write_component(
        &self,
        fields: &NewComponent,
        label: &str,
        stats: &mut ImportStats,
    ) -> Result<Option<String>, ImportError> {
        match self.store.insert_component(fields).await {
            Ok(row) => {
                stats.components += 1;
                debug!(component = label, id = %row.id, kind = %fields.component_type, "component written");
                Ok(Some(row.id))
            }
            Err(err) => self
                .on_failure(ImportLevel::Component, label, &err)
                .map(|()| None),
        }
    }

    async fn import_exercise(
        &self,
        component_id: &str,
        order_index: u32,
        exercise: &ExerciseDoc,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let fields = exercise_fields(component_id, order_index, exercise);
        match self.store.insert_exercise(&fields).await {
            Ok(row) => {
                stats.exercises += 1;
                debug!(exercise = %exercise.name, id = %row.id, order_index, "exercise written");
                Ok(())
            }
            Err(err) => self.on_failure(ImportLevel::Exercise, &exercise.name, &err),
        }
    }
}

fn exercise_fields(component_id: &str, order_index: u32, exercise: &ExerciseDoc) -> NewExercise {
    let has_literal = exercise
        .sets_reps
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    let working = if has_literal {
        None
    } else {
        exercise.working_set()
    };

    NewExercise {
        component_id: component_id.to_string(),
        name: exercise.name.clone(),
        order_index,
        sets_reps: exercise.display_sets_reps(),
        tempo: exercise.tempo.clone(),
        rpe: exercise.rpe.clone(),
        duration: exercise.duration.clone(),
        rest_after: exercise.rest_after.clone(),
        track_weight: exercise.tracks_weight(),
        alternatives: exercise.alternatives.clone(),
        loading_note: exercise.loading_note.clone(),
        progression_note: exercise.progression_note.clone(),
        notes: exercise.notes.clone(),
        set_type: working.and_then(|set| set.set_type.clone()),
        set_number: working.and_then(|set| set.set_number),
        set_range: working.and_then(|set| set.range.clone()),
    }
}

fn success_message(stats: &ImportStats) -> String {
    format!(
        "Successfully imported {} programs with {} days, {} sections, {} components, and {} exercises",
        stats.programs, stats.days, stats.sections, stats.components, stats.exercises
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use persist_core::document::SetDoc;
    use pretty_assertions::assert_eq;

    fn exercise(name: &str) -> ExerciseDoc {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    #[test]
    fn message_lists_every_count() {
        let stats = ImportStats {
            programs: 1,
            days: 2,
            sections: 3,
            components: 4,
            exercises: 5,
        };
        assert_eq!(
            success_message(&stats),
            "Successfully imported 1 programs with 2 days, 3 sections, 4 components, and 5 exercises"
        );
    }

    #[test]
    fn working_set_fills_derived_fields() {
        let mut doc = exercise("Back Squat");
        doc.sets = Some(vec![
            SetDoc {
                set_type: Some("warmup".into()),
                range: Some("2".into()),
                reps: Some("5".into()),
                ..SetDoc::default()
            },
            SetDoc {
                set_type: Some("working".into()),
                set_number: Some(2),
                range: Some("3".into()),
                reps: Some("8".into()),
                tempo: Some("2011".into()),
                rpe: Some("8".into()),
            },
        ]);

        let fields = exercise_fields("cmp-00000001", 0, &doc);
        assert_eq!(fields.sets_reps.as_deref(), Some("3 × 8 @2011 RPE8"));
        assert_eq!(fields.set_type.as_deref(), Some("working"));
        assert_eq!(fields.set_number, Some(2));
        assert_eq!(fields.set_range.as_deref(), Some("3"));
        assert!(fields.track_weight);
    }

    #[test]
    fn literal_sets_reps_wins() {
        let mut doc = exercise("Row");
        doc.sets_reps = Some("4x10".into());
        doc.track_weight = Some(false);
        doc.sets = Some(vec![SetDoc {
            set_type: Some("working".into()),
            range: Some("3".into()),
            ..SetDoc::default()
        }]);

        let fields = exercise_fields("cmp-00000001", 1, &doc);
        assert_eq!(fields.sets_reps.as_deref(), Some("4x10"));
        assert_eq!(fields.set_type, None);
        assert_eq!(fields.set_range, None);
        assert!(!fields.track_weight);
    }
}
