//! The data-access seam the importer, probe, and wipe are written against.
//!
//! `WorkoutService` is the production implementation. Tests wrap it to inject
//! failures at chosen calls.

use persist_core::entities::{
    Exercise, Program, ProgramDay, WorkoutComponent, WorkoutSection,
};
use persist_core::enums::Collection;

use crate::error::DatabaseError;
use crate::service::WorkoutService;

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

/// Program fields written on insert and on natural-key update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProgram {
    pub name: String,
    pub full_name: String,
    pub week_title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewDay {
    pub program_id: String,
    pub day_name: String,
    pub date: Option<String>,
    pub day_title: Option<String>,
    pub coach_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewSection {
    pub day_id: String,
    pub section_type: String,
    pub section_letter: Option<String>,
    pub order_index: u32,
    pub duration: Option<String>,
    pub format_type: Option<String>,
    pub format_structure: Option<String>,
    pub format_interval_seconds: Option<i64>,
    pub format_total_sets: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewComponent {
    pub section_id: String,
    pub component_type: String,
    pub order_index: u32,
    pub rounds: Option<i64>,
    pub transition: Option<String>,
    pub loading_note: Option<String>,
    pub progression_note: Option<String>,
    pub intention_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewExercise {
    pub component_id: String,
    pub name: String,
    pub order_index: u32,
    pub sets_reps: Option<String>,
    pub tempo: Option<String>,
    pub rpe: Option<String>,
    pub duration: Option<String>,
    pub rest_after: Option<String>,
    pub track_weight: bool,
    pub alternatives: Option<Vec<String>>,
    pub loading_note: Option<String>,
    pub progression_note: Option<String>,
    pub notes: Option<String>,
    pub set_type: Option<String>,
    pub set_number: Option<i64>,
    pub set_range: Option<String>,
}

// ---------------------------------------------------------------------------
// WorkoutStore
// ---------------------------------------------------------------------------

/// Storage operations needed to import, probe, and wipe workout plans.
///
/// Every call is an independent round trip; nothing is batched or wrapped in
/// a transaction.
#[allow(async_fn_in_trait)]
pub trait WorkoutStore {
    /// Up to `limit` programs, newest first.
    async fn list_programs(&self, limit: u32) -> Result<Vec<Program>, DatabaseError>;

    async fn find_program_by_name(&self, name: &str) -> Result<Option<Program>, DatabaseError>;

    async fn insert_program(&self, program: &NewProgram) -> Result<Program, DatabaseError>;

    /// Overwrite the descriptive fields of an existing program.
    async fn update_program(&self, id: &str, program: &NewProgram) -> Result<Program, DatabaseError>;

    async fn delete_program(&self, id: &str) -> Result<(), DatabaseError>;

    async fn find_day(
        &self,
        program_id: &str,
        day_name: &str,
    ) -> Result<Option<ProgramDay>, DatabaseError>;

    async fn insert_day(&self, day: &NewDay) -> Result<ProgramDay, DatabaseError>;

    async fn update_day(&self, id: &str, day: &NewDay) -> Result<ProgramDay, DatabaseError>;

    /// Remove every section of a day together with its components and
    /// exercises. Returns the number of sections removed.
    async fn delete_sections_for_day(&self, day_id: &str) -> Result<u64, DatabaseError>;

    async fn insert_section(&self, section: &NewSection) -> Result<WorkoutSection, DatabaseError>;

    async fn insert_component(
        &self,
        component: &NewComponent,
    ) -> Result<WorkoutComponent, DatabaseError>;

    async fn insert_exercise(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError>;

    /// Delete every row of one collection. Returns the number of rows removed.
    async fn clear_collection(&self, collection: Collection) -> Result<u64, DatabaseError>;
}

impl WorkoutStore for WorkoutService {
    async fn list_programs(&self, limit: u32) -> Result<Vec<Program>, DatabaseError> {
        Self::list_programs(self, limit).await
    }

    async fn find_program_by_name(&self, name: &str) -> Result<Option<Program>, DatabaseError> {
        self.get_program_by_name(name).await
    }

    async fn insert_program(&self, program: &NewProgram) -> Result<Program, DatabaseError> {
        self.create_program(program).await
    }

    async fn update_program(&self, id: &str, program: &NewProgram) -> Result<Program, DatabaseError> {
        Self::update_program(self, id, program).await
    }

    async fn delete_program(&self, id: &str) -> Result<(), DatabaseError> {
        Self::delete_program(self, id).await
    }

    async fn find_day(
        &self,
        program_id: &str,
        day_name: &str,
    ) -> Result<Option<ProgramDay>, DatabaseError> {
        self.get_day(program_id, day_name).await
    }

    async fn insert_day(&self, day: &NewDay) -> Result<ProgramDay, DatabaseError> {
        self.create_day(day).await
    }

    async fn update_day(&self, id: &str, day: &NewDay) -> Result<ProgramDay, DatabaseError> {
        Self::update_day(self, id, day).await
    }

    async fn delete_sections_for_day(&self, day_id: &str) -> Result<u64, DatabaseError> {
        self.delete_day_sections(day_id).await
    }

    async fn insert_section(&self, section: &NewSection) -> Result<WorkoutSection, DatabaseError> {
        self.create_section(section).await
    }

    async fn insert_component(
        &self,
        component: &NewComponent,
    ) -> Result<WorkoutComponent, DatabaseError> {
        self.create_component(component).await
    }

    async fn insert_exercise(&self, exercise: &NewExercise) -> Result<Exercise, DatabaseError> {
        self.create_exercise(exercise).await
    }

    async fn clear_collection(&self, collection: Collection) -> Result<u64, DatabaseError> {
        Self::clear_collection(self, collection).await
    }
}
