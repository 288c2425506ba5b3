//! Shared helpers for persist-import integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use persist_core::document::WorkoutDocument;
use persist_core::entities::{Exercise, Program, ProgramDay, WorkoutComponent, WorkoutSection};
use persist_core::enums::Collection;
use persist_db::error::DatabaseError;
use persist_db::service::WorkoutService;
use persist_db::store::{NewComponent, NewDay, NewExercise, NewProgram, NewSection, WorkoutStore};

pub const WEEK_JSON: &str = include_str!("../fixtures/week.json");

/// Programs, days, sections, components (implicit ones included) and
/// exercises in `week.json`.
pub const WEEK_TOTALS: [u32; 5] = [2, 3, 4, 6, 8];

pub fn week_document() -> WorkoutDocument {
    WorkoutDocument::from_json_str(WEEK_JSON).unwrap()
}

pub async fn service() -> WorkoutService {
    WorkoutService::new_local(":memory:").await.unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    ListPrograms,
    InsertProgram,
    UpdateProgram,
    DeleteProgram,
    InsertDay,
    DeleteSections,
    InsertSection,
    InsertComponent,
    InsertExercise,
    ClearCollection,
}

/// A `WorkoutStore` that fails the `nth` (1-based) occurrence of one call and
/// forwards everything else to a real service.
pub struct FailingStore {
    pub inner: WorkoutService,
    fail: Option<(Call, u32)>,
    seen: Mutex<HashMap<Call, u32>>,
}

impl FailingStore {
    pub fn new(inner: WorkoutService) -> Self {
        Self {
            inner,
            fail: None,
            seen: Mutex::new(HashMap::new()),
        }
    }

    pub fn failing(inner: WorkoutService, call: Call, nth: u32) -> Self {
        Self {
            fail: Some((call, nth)),
            ..Self::new(inner)
        }
    }

    /// How many times `call` was attempted.
    pub fn calls(&self, call: Call) -> u32 {
        self.seen.lock().unwrap().get(&call).copied().unwrap_or(0)
    }

    fn tick(&self, call: Call) -> Result<(), DatabaseError> {
        let mut seen = self.seen.lock().unwrap();
        let count = seen.entry(call).or_insert(0);
        *count += 1;
        if self.fail == Some((call, *count)) {
            return Err(DatabaseError::Query(format!(
                "injected failure on {call:?} #{count}"
            )));
        }
        Ok(())
    }
}

impl WorkoutStore for FailingStore {
    async fn list_programs(&self, limit: u32) -> Result<Vec<Program>, DatabaseError> {
        self.tick(Call::ListPrograms)?;
        WorkoutStore::list_programs(&self.inner, limit).await
    }

    async fn find_program_by_name(&self, name: &str) -> Result<Option<Program>, DatabaseError> {
        self.inner.find_program_by_name(name).await
    }

    async fn insert_program(&self, program: &NewProgram) -> Result<Program, DatabaseError> {
        self.tick(Call::InsertProgram)?;
        self.inner.insert_program(program).await
    }

    async fn update_program(&self, id: &str, program: &NewProgram) -> Result<Program, DatabaseError> {
        self.tick(Call::UpdateProgram)?;
        WorkoutStore::update_program(&self.inner, id, program).await
    }

    async fn delete_program(&self, id: &str) -> Result<(), DatabaseError> {
        self.tick(Call::DeleteProgram)?;
        WorkoutStore::delete_program(&self.inner, id).await
    }

    async fn find_day(&self, program_id: &str, day_name: &str) -> Result<Option<ProgramDay>, DatabaseError> {
        self.inner.find_day(program_id, day_name).await
    }

    async fn insert_day(&self, day: &NewDay) -> Result<ProgramDay, DatabaseError> {
        self.tick(Call::InsertDay)?;
        self.inner.insert_day(day).await
    }

    async fn update_day(&self, id: &str, day: &NewDay) -> Result<ProgramDay, DatabaseError> {
        WorkoutStore::update_day(&self.inner, id, day).await
    }

    async fn delete_sections_for_day(&self, day_id: &str) -> Result<u64, DatabaseError> {
        self.tick(Call::DeleteSections)?;
        self.inner.delete_sections_for_day(day_id).await
    }

    async fn insert_section(&self, section: &NewSection) -> Result<WorkoutSection, DatabaseError> {
        self.tick(Call::InsertSection)?;
        self.inner.insert_section(section).await
    }

    async fn insert_component(&self, component: &NewComponent) -> Result<WorkoutComponent, DatabaseError> {
        self.tick(Call::InsertComponent)?;
        self.inner.insert_component(component).await
    }

    async fn insert_exercise(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError> {
        self.tick(Call::InsertExercise)?;
        self.inner.insert_exercise(exercise).await
    }

    async fn clear_collection(&self, collection: Collection) -> Result<u64, DatabaseError> {
        self.tick(Call::ClearCollection)?;
        WorkoutStore::clear_collection(&self.inner, collection).await
    }
}
