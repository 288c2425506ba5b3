//! Exercise repository.

use chrono::Utc;

use persist_core::entities::Exercise;
use persist_core::ids::PREFIX_EXERCISE;

use crate::error::DatabaseError;
use crate::helpers::{
    get_bool, get_opt_string, get_order_index, parse_datetime, parse_string_list,
    string_list_to_json,
};
use crate::service::WorkoutService;
use crate::store::NewExercise;

const SELECT_COLS: &str = "id, component_id, name, order_index, sets_reps, tempo, rpe, duration, \
     rest_after, track_weight, alternatives, loading_note, progression_note, notes, set_type, \
     set_number, set_range, created_at";

/// `SELECT_COLS` qualified with the `e.` alias for joins.
const JOINED_COLS: &str = "e.id, e.component_id, e.name, e.order_index, e.sets_reps, e.tempo, \
     e.rpe, e.duration, e.rest_after, e.track_weight, e.alternatives, e.loading_note, \
     e.progression_note, e.notes, e.set_type, e.set_number, e.set_range, e.created_at";

fn row_to_exercise(row: &libsql::Row) -> Result<Exercise, DatabaseError> {
    let alternatives = row.get::<Option<String>>(10)?;
    Ok(Exercise {
        id: row.get(0)?,
        component_id: row.get(1)?,
        name: row.get(2)?,
        order_index: get_order_index(row, 3)?,
        sets_reps: get_opt_string(row, 4)?,
        tempo: get_opt_string(row, 5)?,
        rpe: get_opt_string(row, 6)?,
        duration: get_opt_string(row, 7)?,
        rest_after: get_opt_string(row, 8)?,
        track_weight: get_bool(row, 9)?,
        alternatives: parse_string_list(alternatives.as_deref())?,
        loading_note: get_opt_string(row, 11)?,
        progression_note: get_opt_string(row, 12)?,
        notes: get_opt_string(row, 13)?,
        set_type: get_opt_string(row, 14)?,
        set_number: row.get::<Option<i64>>(15)?,
        set_range: get_opt_string(row, 16)?,
        created_at: parse_datetime(&row.get::<String>(17)?)?,
    })
}

impl WorkoutService {
    pub async fn create_exercise(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_EXERCISE).await?;
        let alternatives = string_list_to_json(exercise.alternatives.as_deref())?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO exercises ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)"
                ),
                libsql::params![
                    id.as_str(),
                    exercise.component_id.as_str(),
                    exercise.name.as_str(),
                    i64::from(exercise.order_index),
                    exercise.sets_reps.as_deref(),
                    exercise.tempo.as_deref(),
                    exercise.rpe.as_deref(),
                    exercise.duration.as_deref(),
                    exercise.rest_after.as_deref(),
                    exercise.track_weight,
                    alternatives,
                    exercise.loading_note.as_deref(),
                    exercise.progression_note.as_deref(),
                    exercise.notes.as_deref(),
                    exercise.set_type.as_deref(),
                    exercise.set_number,
                    exercise.set_range.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Exercise {
            id,
            component_id: exercise.component_id.clone(),
            name: exercise.name.clone(),
            order_index: exercise.order_index,
            sets_reps: exercise.sets_reps.clone(),
            tempo: exercise.tempo.clone(),
            rpe: exercise.rpe.clone(),
            duration: exercise.duration.clone(),
            rest_after: exercise.rest_after.clone(),
            track_weight: exercise.track_weight,
            alternatives: exercise.alternatives.clone(),
            loading_note: exercise.loading_note.clone(),
            progression_note: exercise.progression_note.clone(),
            notes: exercise.notes.clone(),
            set_type: exercise.set_type.clone(),
            set_number: exercise.set_number,
            set_range: exercise.set_range.clone(),
            created_at: now,
        })
    }

    pub async fn get_exercise(&self, id: &str) -> Result<Exercise, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM exercises WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_exercise(&row)
    }

    /// Exercises of a component ordered by `order_index`.
    pub async fn list_exercises(&self, component_id: &str) -> Result<Vec<Exercise>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM exercises WHERE component_id = ?1
                     ORDER BY order_index, rowid"
                ),
                [component_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_exercise(&row)?);
        }
        Ok(results)
    }

    /// Every exercise of a day, in section → component → exercise order.
    pub async fn list_exercises_for_day(&self, day_id: &str) -> Result<Vec<Exercise>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {JOINED_COLS} FROM exercises e
                     JOIN workout_components c ON c.id = e.component_id
                     JOIN workout_sections s ON s.id = c.section_id
                     WHERE s.day_id = ?1
                     ORDER BY s.order_index, c.order_index, e.order_index, e.rowid"
                ),
                [day_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_exercise(&row)?);
        }
        Ok(results)
    }
}
