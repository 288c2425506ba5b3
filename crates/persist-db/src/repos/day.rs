//! Program day repository.

use chrono::Utc;

use persist_core::entities::ProgramDay;
use persist_core::ids::PREFIX_DAY;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::WorkoutService;
use crate::store::NewDay;

const SELECT_COLS: &str = "id, program_id, day_name, date, day_title, coach_notes, created_at";

fn row_to_day(row: &libsql::Row) -> Result<ProgramDay, DatabaseError> {
    Ok(ProgramDay {
        id: row.get(0)?,
        program_id: row.get(1)?,
        day_name: row.get(2)?,
        date: get_opt_string(row, 3)?,
        day_title: get_opt_string(row, 4)?,
        coach_notes: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl WorkoutService {
    pub async fn create_day(&self, day: &NewDay) -> Result<ProgramDay, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DAY).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO program_days ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    day.program_id.as_str(),
                    day.day_name.as_str(),
                    day.date.as_deref(),
                    day.day_title.as_deref(),
                    day.coach_notes.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(ProgramDay {
            id,
            program_id: day.program_id.clone(),
            day_name: day.day_name.clone(),
            date: day.date.clone(),
            day_title: day.day_title.clone(),
            coach_notes: day.coach_notes.clone(),
            created_at: now,
        })
    }

    pub async fn get_day_by_id(&self, id: &str) -> Result<ProgramDay, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM program_days WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_day(&row)
    }

    /// Lookup by natural key `(program_id, day_name)`.
    pub async fn get_day(
        &self,
        program_id: &str,
        day_name: &str,
    ) -> Result<Option<ProgramDay>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM program_days WHERE program_id = ?1 AND day_name = ?2"),
                libsql::params![program_id, day_name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_day(&row)?)),
            None => Ok(None),
        }
    }

    /// Overwrite date, title, and coach notes.
    pub async fn update_day(&self, id: &str, day: &NewDay) -> Result<ProgramDay, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE program_days SET date = ?1, day_title = ?2, coach_notes = ?3 WHERE id = ?4",
                libsql::params![
                    day.date.as_deref(),
                    day.day_title.as_deref(),
                    day.coach_notes.as_deref(),
                    id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_day_by_id(id).await
    }

    pub async fn list_days(&self, program_id: &str) -> Result<Vec<ProgramDay>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM program_days WHERE program_id = ?1 ORDER BY date, rowid"),
                [program_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_day(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{new_day, new_program, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn natural_key_lookup() {
        let svc = test_service().await;
        let program = svc.create_program(&new_program("Strength")).await.unwrap();
        let day = svc.create_day(&new_day(&program.id, "Monday")).await.unwrap();

        let found = svc.get_day(&program.id, "Monday").await.unwrap().unwrap();
        assert_eq!(found, day);
        assert!(svc.get_day(&program.id, "Tuesday").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn natural_key_is_unique_per_program() {
        let svc = test_service().await;
        let a = svc.create_program(&new_program("A")).await.unwrap();
        let b = svc.create_program(&new_program("B")).await.unwrap();
        svc.create_day(&new_day(&a.id, "Monday")).await.unwrap();
        svc.create_day(&new_day(&b.id, "Monday")).await.unwrap();
        assert!(svc.create_day(&new_day(&a.id, "Monday")).await.is_err());
    }

    #[tokio::test]
    async fn day_requires_existing_program() {
        let svc = test_service().await;
        assert!(svc.create_day(&new_day("prg-00000000", "Monday")).await.is_err());
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let svc = test_service().await;
        let program = svc.create_program(&new_program("Strength")).await.unwrap();
        let day = svc.create_day(&new_day(&program.id, "Monday")).await.unwrap();

        let mut fields = new_day(&program.id, "Monday");
        fields.day_title = Some("Upper".into());
        fields.coach_notes = Some("Go light".into());
        let updated = svc.update_day(&day.id, &fields).await.unwrap();
        assert_eq!(updated.id, day.id);
        assert_eq!(updated.day_title.as_deref(), Some("Upper"));
        assert_eq!(updated.coach_notes.as_deref(), Some("Go light"));
    }

    #[tokio::test]
    async fn list_days_for_program() {
        let svc = test_service().await;
        let program = svc.create_program(&new_program("Strength")).await.unwrap();
        svc.create_day(&new_day(&program.id, "Monday")).await.unwrap();
        svc.create_day(&new_day(&program.id, "Tuesday")).await.unwrap();
        let days = svc.list_days(&program.id).await.unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day_name, "Monday");
    }
}
