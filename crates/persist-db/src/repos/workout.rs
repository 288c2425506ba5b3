//! Read-side assembly of a full day workout tree.

use persist_core::responses::{ComponentWorkout, DayWorkout, SectionWorkout};

use crate::error::DatabaseError;
use crate::service::WorkoutService;

impl WorkoutService {
    /// Load a day with its ordered sections, components, and exercises.
    pub async fn get_day_workout_by_id(&self, day_id: &str) -> Result<DayWorkout, DatabaseError> {
        let day = self.get_day_by_id(day_id).await?;
        let mut sections = Vec::new();
        for section in self.list_sections(&day.id).await? {
            let mut components = Vec::new();
            for component in self.list_components(&section.id).await? {
                let exercises = self.list_exercises(&component.id).await?;
                components.push(ComponentWorkout {
                    component,
                    exercises,
                });
            }
            sections.push(SectionWorkout {
                section,
                components,
            });
        }
        Ok(DayWorkout { day, sections })
    }

    /// Look a day up by program name and weekday, then load its tree.
    pub async fn get_day_workout(
        &self,
        program_name: &str,
        day_name: &str,
    ) -> Result<Option<DayWorkout>, DatabaseError> {
        let Some(program) = self.get_program_by_name(program_name).await? else {
            return Ok(None);
        };
        let Some(day) = self.get_day(&program.id, day_name).await? else {
            return Ok(None);
        };
        self.get_day_workout_by_id(&day.id).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{seed_day, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn loads_nested_tree() {
        let svc = test_service().await;
        let (day_id, ids) = seed_day(&svc, "Strength", "Monday").await;

        let workout = svc.get_day_workout("Strength", "Monday").await.unwrap().unwrap();
        assert_eq!(workout.day.id, day_id);
        assert_eq!(workout.sections.len(), 1);
        let exercise_ids: Vec<&str> = workout.exercises().map(|e| e.id.as_str()).collect();
        assert_eq!(exercise_ids, vec![ids[0].as_str(), ids[1].as_str()]);
    }

    #[tokio::test]
    async fn unknown_program_or_day_is_none() {
        let svc = test_service().await;
        seed_day(&svc, "Strength", "Monday").await;
        assert!(svc.get_day_workout("Engine", "Monday").await.unwrap().is_none());
        assert!(svc.get_day_workout("Strength", "Sunday").await.unwrap().is_none());
    }
}
