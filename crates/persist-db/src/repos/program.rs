//! Program repository: natural-key lookup, insert, update, delete.

use chrono::Utc;

use persist_core::entities::Program;
use persist_core::ids::PREFIX_PROGRAM;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::WorkoutService;
use crate::store::NewProgram;

const SELECT_COLS: &str = "id, name, full_name, week_title, start_date, end_date, created_at";

fn row_to_program(row: &libsql::Row) -> Result<Program, DatabaseError> {
    Ok(Program {
        id: row.get(0)?,
        name: row.get(1)?,
        full_name: row.get(2)?,
        week_title: get_opt_string(row, 3)?,
        start_date: get_opt_string(row, 4)?,
        end_date: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl WorkoutService {
    pub async fn create_program(&self, program: &NewProgram) -> Result<Program, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROGRAM).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO programs ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    program.name.as_str(),
                    program.full_name.as_str(),
                    program.week_title.as_deref(),
                    program.start_date.as_deref(),
                    program.end_date.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Program {
            id,
            name: program.name.clone(),
            full_name: program.full_name.clone(),
            week_title: program.week_title.clone(),
            start_date: program.start_date.clone(),
            end_date: program.end_date.clone(),
            created_at: now,
        })
    }

    pub async fn get_program(&self, id: &str) -> Result<Program, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM programs WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_program(&row)
    }

    pub async fn get_program_by_name(&self, name: &str) -> Result<Option<Program>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM programs WHERE name = ?1"), [name])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_program(&row)?)),
            None => Ok(None),
        }
    }

    /// Overwrite full name and week metadata. The name itself is the natural
    /// key and is not changed.
    pub async fn update_program(&self, id: &str, program: &NewProgram) -> Result<Program, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE programs SET full_name = ?1, week_title = ?2, start_date = ?3, end_date = ?4
                 WHERE id = ?5",
                libsql::params![
                    program.full_name.as_str(),
                    program.week_title.as_deref(),
                    program.start_date.as_deref(),
                    program.end_date.as_deref(),
                    id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_program(id).await
    }

    pub async fn delete_program(&self, id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM programs WHERE id = ?1", [id])
            .await?;
        Ok(())
    }

    /// Programs newest first.
    pub async fn list_programs(&self, limit: u32) -> Result<Vec<Program>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM programs ORDER BY created_at DESC, rowid DESC LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_program(&row)?);
        }
        Ok(results)
    }
}
