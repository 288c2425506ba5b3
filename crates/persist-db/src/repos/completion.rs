//! Whole-day workout completion repository.

use chrono::Utc;

use persist_core::entities::WorkoutCompletion;
use persist_core::ids::PREFIX_COMPLETION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::WorkoutService;

const SELECT_COLS: &str =
    "id, day_id, completed_at, total_exercises, completed_exercises, notes";

fn row_to_completion(row: &libsql::Row) -> Result<WorkoutCompletion, DatabaseError> {
    Ok(WorkoutCompletion {
        id: row.get(0)?,
        day_id: row.get(1)?,
        completed_at: parse_datetime(&row.get::<String>(2)?)?,
        total_exercises: row.get::<Option<i64>>(3)?,
        completed_exercises: row.get::<Option<i64>>(4)?,
        notes: get_opt_string(row, 5)?,
    })
}

impl WorkoutService {
    pub async fn get_workout_completion(
        &self,
        day_id: &str,
    ) -> Result<Option<WorkoutCompletion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM workout_completions WHERE day_id = ?1"),
                [day_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_completion(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn is_workout_completed(&self, day_id: &str) -> Result<bool, DatabaseError> {
        Ok(self.get_workout_completion(day_id).await?.is_some())
    }

    /// Mark a day as done.
    ///
    /// Creates the day's completion record when missing, then writes a
    /// completed log for every exercise of the day that has none. Calling it
    /// again is harmless: the record is kept and no duplicate logs appear.
    pub async fn complete_workout(&self, day_id: &str) -> Result<WorkoutCompletion, DatabaseError> {
        // Surfaces NoResult for unknown days before anything is written.
        self.get_day_by_id(day_id).await?;

        let exercise_ids: Vec<String> = self
            .list_exercises_for_day(day_id)
            .await?
            .into_iter()
            .map(|e| e.id)
            .collect();
        let written = self.complete_exercises(&exercise_ids).await?;
        tracing::debug!(day_id, written, "completed remaining exercises");

        if let Some(existing) = self.get_workout_completion(day_id).await? {
            return Ok(existing);
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMPLETION).await?;
        let total = i64::try_from(exercise_ids.len())
            .map_err(|e| DatabaseError::InvalidState(format!("exercise count: {e}")))?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO workout_completions ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                libsql::params![id.as_str(), day_id, now.to_rfc3339(), total, total, None::<String>],
            )
            .await?;

        Ok(WorkoutCompletion {
            id,
            day_id: day_id.to_string(),
            completed_at: now,
            total_exercises: Some(total),
            completed_exercises: Some(total),
            notes: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{seed_day, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn complete_workout_logs_every_exercise_once() {
        let svc = test_service().await;
        let (day_id, ids) = seed_day(&svc, "Strength", "Monday").await;
        svc.toggle_exercise_completion(&ids[0]).await.unwrap();
        assert!(!svc.is_workout_completed(&day_id).await.unwrap());

        let completion = svc.complete_workout(&day_id).await.unwrap();
        assert_eq!(completion.total_exercises, Some(2));
        assert!(svc.is_workout_completed(&day_id).await.unwrap());

        let logs = svc.logs_for_day(&day_id).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|l| l.completed));

        let again = svc.complete_workout(&day_id).await.unwrap();
        assert_eq!(again.id, completion.id);
        assert_eq!(svc.logs_for_day(&day_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_day_is_rejected() {
        let svc = test_service().await;
        assert!(svc.complete_workout("day-00000000").await.is_err());
    }
}
