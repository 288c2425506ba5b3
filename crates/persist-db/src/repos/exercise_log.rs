//! Exercise log repository: completion toggles, weight/reps entries, and the
//! previous-performance lookup.
//!
//! An exercise can collect many logs over time. The most recent one (by
//! `logged_at`) is its current log; toggles and edits rewrite it in place.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use persist_core::entities::ExerciseLog;
use persist_core::ids::PREFIX_EXERCISE_LOG;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, parse_datetime};
use crate::service::WorkoutService;

const SELECT_COLS: &str = "id, exercise_id, weight, reps, completed, logged_at, notes";

/// `SELECT_COLS` qualified with the `l.` alias for joins.
const JOINED_COLS: &str = "l.id, l.exercise_id, l.weight, l.reps, l.completed, l.logged_at, l.notes";

/// Values written by [`WorkoutService::upsert_exercise_log`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseLogInput {
    pub exercise_id: String,
    pub completed: bool,
    pub weight: Option<f64>,
    pub reps: Option<i64>,
    pub notes: Option<String>,
}

fn row_to_log(row: &libsql::Row) -> Result<ExerciseLog, DatabaseError> {
    Ok(ExerciseLog {
        id: row.get(0)?,
        exercise_id: row.get(1)?,
        weight: row.get::<Option<f64>>(2)?,
        reps: row.get::<Option<i64>>(3)?,
        completed: get_bool(row, 4)?,
        logged_at: parse_datetime(&row.get::<String>(5)?)?,
        notes: get_opt_string(row, 6)?,
    })
}

impl WorkoutService {
    /// The most recent log of an exercise.
    pub async fn current_exercise_log(
        &self,
        exercise_id: &str,
    ) -> Result<Option<ExerciseLog>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM exercise_logs WHERE exercise_id = ?1
                     ORDER BY logged_at DESC, rowid DESC LIMIT 1"
                ),
                [exercise_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_log(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert_exercise_log(&self, input: &ExerciseLogInput) -> Result<ExerciseLog, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_EXERCISE_LOG).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO exercise_logs ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    input.exercise_id.as_str(),
                    input.weight,
                    input.reps,
                    input.completed,
                    now.to_rfc3339(),
                    input.notes.as_deref()
                ],
            )
            .await?;
        Ok(ExerciseLog {
            id,
            exercise_id: input.exercise_id.clone(),
            weight: input.weight,
            reps: input.reps,
            completed: input.completed,
            logged_at: now,
            notes: input.notes.clone(),
        })
    }

    /// Flip the completion flag of the current log, or create a completed log
    /// when the exercise has none. Refreshes `logged_at` either way.
    pub async fn toggle_exercise_completion(
        &self,
        exercise_id: &str,
    ) -> Result<ExerciseLog, DatabaseError> {
        let Some(mut log) = self.current_exercise_log(exercise_id).await? else {
            return self
                .insert_exercise_log(&ExerciseLogInput {
                    exercise_id: exercise_id.to_string(),
                    completed: true,
                    ..ExerciseLogInput::default()
                })
                .await;
        };

        let now = Utc::now();
        log.completed = !log.completed;
        log.logged_at = now;
        self.db()
            .conn()
            .execute(
                "UPDATE exercise_logs SET completed = ?1, logged_at = ?2 WHERE id = ?3",
                libsql::params![log.completed, now.to_rfc3339(), log.id.as_str()],
            )
            .await?;
        tracing::debug!(exercise_id, completed = log.completed, "toggled exercise");
        Ok(log)
    }

    /// Write weight, reps, notes, and completion onto the current log, or
    /// create one.
    pub async fn upsert_exercise_log(
        &self,
        input: &ExerciseLogInput,
    ) -> Result<ExerciseLog, DatabaseError> {
        let Some(existing) = self.current_exercise_log(&input.exercise_id).await? else {
            return self.insert_exercise_log(input).await;
        };

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE exercise_logs SET completed = ?1, weight = ?2, reps = ?3, notes = ?4, logged_at = ?5
                 WHERE id = ?6",
                libsql::params![
                    input.completed,
                    input.weight,
                    input.reps,
                    input.notes.as_deref(),
                    now.to_rfc3339(),
                    existing.id.as_str()
                ],
            )
            .await?;
        Ok(ExerciseLog {
            id: existing.id,
            exercise_id: input.exercise_id.clone(),
            weight: input.weight,
            reps: input.reps,
            completed: input.completed,
            logged_at: now,
            notes: input.notes.clone(),
        })
    }

    /// Every log of every exercise in a day.
    pub async fn logs_for_day(&self, day_id: &str) -> Result<Vec<ExerciseLog>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {JOINED_COLS} FROM exercise_logs l
                     JOIN exercises e ON e.id = l.exercise_id
                     JOIN workout_components c ON c.id = e.component_id
                     JOIN workout_sections s ON s.id = c.section_id
                     WHERE s.day_id = ?1
                     ORDER BY l.logged_at, l.rowid"
                ),
                [day_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_log(&row)?);
        }
        Ok(results)
    }

    /// Most recent log of an exercise with both weight and reps recorded.
    pub async fn previous_exercise_log(
        &self,
        exercise_id: &str,
    ) -> Result<Option<ExerciseLog>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM exercise_logs
                     WHERE exercise_id = ?1 AND weight IS NOT NULL AND reps IS NOT NULL
                     ORDER BY logged_at DESC, rowid DESC LIMIT 1"
                ),
                [exercise_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_log(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a completed log for each listed exercise that has no completed
    /// log yet. Returns how many logs were written.
    pub async fn complete_exercises(&self, exercise_ids: &[String]) -> Result<u64, DatabaseError> {
        let mut written = 0;
        for exercise_id in exercise_ids {
            let mut rows = self
                .db()
                .conn()
                .query(
                    "SELECT 1 FROM exercise_logs WHERE exercise_id = ?1 AND completed = 1 LIMIT 1",
                    [exercise_id.as_str()],
                )
                .await?;
            if rows.next().await?.is_some() {
                continue;
            }
            self.insert_exercise_log(&ExerciseLogInput {
                exercise_id: exercise_id.clone(),
                completed: true,
                ..ExerciseLogInput::default()
            })
            .await?;
            written += 1;
        }
        Ok(written)
    }
}
