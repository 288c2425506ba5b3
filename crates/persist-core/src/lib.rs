//! # persist-core
//!
//! Core types, ID generation prefixes, and error types for Persist.
//!
//! This crate provides the foundational types shared across all Persist crates:
//! - Entity structs for every stored row (programs, days, sections, components,
//!   exercises, exercise logs, workout completions)
//! - Enums for component types, import levels, collections, and the import
//!   workflow state machine
//! - The typed import document and its lenient decode step
//! - Cross-cutting error types
//! - Response types shared by the importer and the CLI
//! - Workout progress computation

pub mod document;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod progress;
pub mod responses;
