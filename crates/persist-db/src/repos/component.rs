//! Workout component repository.

use chrono::Utc;

use persist_core::entities::WorkoutComponent;
use persist_core::ids::PREFIX_COMPONENT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_order_index, parse_datetime};
use crate::service::WorkoutService;
use crate::store::NewComponent;

const SELECT_COLS: &str = "id, section_id, component_type, order_index, rounds, transition, \
     loading_note, progression_note, intention_note, created_at";

fn row_to_component(row: &libsql::Row) -> Result<WorkoutComponent, DatabaseError> {
    Ok(WorkoutComponent {
        id: row.get(0)?,
        section_id: row.get(1)?,
        component_type: row.get(2)?,
        order_index: get_order_index(row, 3)?,
        rounds: row.get::<Option<i64>>(4)?,
        transition: get_opt_string(row, 5)?,
        loading_note: get_opt_string(row, 6)?,
        progression_note: get_opt_string(row, 7)?,
        intention_note: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl WorkoutService {
    pub async fn create_component(
        &self,
        component: &NewComponent,
    ) -> Result<WorkoutComponent, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMPONENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO workout_components ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    component.section_id.as_str(),
                    component.component_type.as_str(),
                    i64::from(component.order_index),
                    component.rounds,
                    component.transition.as_deref(),
                    component.loading_note.as_deref(),
                    component.progression_note.as_deref(),
                    component.intention_note.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(WorkoutComponent {
            id,
            section_id: component.section_id.clone(),
            component_type: component.component_type.clone(),
            order_index: component.order_index,
            rounds: component.rounds,
            transition: component.transition.clone(),
            loading_note: component.loading_note.clone(),
            progression_note: component.progression_note.clone(),
            intention_note: component.intention_note.clone(),
            created_at: now,
        })
    }

    /// Components of a section ordered by `order_index`.
    pub async fn list_components(
        &self,
        section_id: &str,
    ) -> Result<Vec<WorkoutComponent>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM workout_components WHERE section_id = ?1
                     ORDER BY order_index, rowid"
                ),
                [section_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_component(&row)?);
        }
        Ok(results)
    }
}
