//! Repository modules implementing storage operations for every Persist entity.
//!
//! Each module adds methods to `WorkoutService` via `impl WorkoutService` blocks.

pub mod collection;
pub mod completion;
pub mod component;
pub mod day;
pub mod exercise;
pub mod exercise_log;
pub mod program;
pub mod section;
pub mod workout;
