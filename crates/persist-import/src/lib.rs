//! # persist-import
//!
//! The workout plan import pipeline:
//!
//! - [`guard`]: size, node-count, and blocklist checks on the raw file
//! - [`validator`]: structural validation with errors, warnings, and counts
//! - [`importer`]: flattens a document into rows through a [`WorkoutStore`]
//!   under a per-level [`policy::ErrorPolicy`]
//! - [`probe`]: read/write/delete connectivity check
//! - [`wipe`]: confirmation-guarded delete of all workout data
//! - [`workflow`]: the select → validate → import state machine
//!
//! [`WorkoutStore`]: persist_db::store::WorkoutStore

pub mod error;
pub mod guard;
pub mod importer;
pub mod policy;
pub mod probe;
pub mod validator;
pub mod wipe;
pub mod workflow;

pub use error::ImportError;
pub use guard::InputGuard;
pub use importer::Importer;
pub use policy::{ErrorPolicy, FailureAction};
pub use validator::validate;
pub use workflow::ImportWorkflow;
