//! Entity structs for all Persist rows.
//!
//! Each entity maps to a table in the libSQL database (see
//! `persist-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema checks.

mod completion;
mod component;
mod day;
mod exercise;
mod exercise_log;
mod program;
mod section;

pub use completion::WorkoutCompletion;
pub use component::WorkoutComponent;
pub use day::ProgramDay;
pub use exercise::Exercise;
pub use exercise_log::ExerciseLog;
pub use program::Program;
pub use section::WorkoutSection;
