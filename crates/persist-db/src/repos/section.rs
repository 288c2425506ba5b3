//! Workout section repository, including the per-day child wipe used by
//! re-imports.

use chrono::Utc;

use persist_core::entities::WorkoutSection;
use persist_core::ids::PREFIX_SECTION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_order_index, parse_datetime};
use crate::service::WorkoutService;
use crate::store::NewSection;

const SELECT_COLS: &str = "id, day_id, section_type, section_letter, order_index, duration, \
     format_type, format_structure, format_interval_seconds, format_total_sets, created_at";

fn row_to_section(row: &libsql::Row) -> Result<WorkoutSection, DatabaseError> {
    Ok(WorkoutSection {
        id: row.get(0)?,
        day_id: row.get(1)?,
        section_type: row.get(2)?,
        section_letter: get_opt_string(row, 3)?,
        order_index: get_order_index(row, 4)?,
        duration: get_opt_string(row, 5)?,
        format_type: get_opt_string(row, 6)?,
        format_structure: get_opt_string(row, 7)?,
        format_interval_seconds: row.get::<Option<i64>>(8)?,
        format_total_sets: row.get::<Option<i64>>(9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

impl WorkoutService {
    pub async fn create_section(&self, section: &NewSection) -> Result<WorkoutSection, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SECTION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO workout_sections ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
                ),
                libsql::params![
                    id.as_str(),
                    section.day_id.as_str(),
                    section.section_type.as_str(),
                    section.section_letter.as_deref(),
                    i64::from(section.order_index),
                    section.duration.as_deref(),
                    section.format_type.as_deref(),
                    section.format_structure.as_deref(),
                    section.format_interval_seconds,
                    section.format_total_sets,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(WorkoutSection {
            id,
            day_id: section.day_id.clone(),
            section_type: section.section_type.clone(),
            section_letter: section.section_letter.clone(),
            order_index: section.order_index,
            duration: section.duration.clone(),
            format_type: section.format_type.clone(),
            format_structure: section.format_structure.clone(),
            format_interval_seconds: section.format_interval_seconds,
            format_total_sets: section.format_total_sets,
            created_at: now,
        })
    }

    /// Sections of a day ordered by `order_index`.
    pub async fn list_sections(&self, day_id: &str) -> Result<Vec<WorkoutSection>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM workout_sections WHERE day_id = ?1
                     ORDER BY order_index, rowid"
                ),
                [day_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_section(&row)?);
        }
        Ok(results)
    }

    /// Delete a day's exercises, components, and sections, children first.
    ///
    /// Exercise logs of the removed exercises go with them through the
    /// `exercise_logs` foreign key cascade.
    /// Returns the number of sections removed.
    pub async fn delete_day_sections(&self, day_id: &str) -> Result<u64, DatabaseError> {
        let conn = self.db().conn();
        conn.execute(
            "DELETE FROM exercises WHERE component_id IN (
                 SELECT c.id FROM workout_components c
                 JOIN workout_sections s ON s.id = c.section_id
                 WHERE s.day_id = ?1)",
            [day_id],
        )
        .await?;
        conn.execute(
            "DELETE FROM workout_components WHERE section_id IN (
                 SELECT id FROM workout_sections WHERE day_id = ?1)",
            [day_id],
        )
        .await?;
        let removed = conn
            .execute("DELETE FROM workout_sections WHERE day_id = ?1", [day_id])
            .await?;
        Ok(removed)
    }
}
