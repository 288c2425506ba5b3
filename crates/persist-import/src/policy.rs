//! What the importer does when a write fails at a given tree level.

use persist_core::enums::ImportLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureAction {
    /// Stop the import and report failure.
    Abort,
    /// Log a warning, drop the entity and its subtree, and continue.
    Skip,
}

/// One [`FailureAction`] per [`ImportLevel`].
///
/// The default aborts on program failures and skips everything below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPolicy {
    pub program: FailureAction,
    pub day: FailureAction,
    pub section: FailureAction,
    pub component: FailureAction,
    pub exercise: FailureAction,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            program: FailureAction::Abort,
            day: FailureAction::Skip,
            section: FailureAction::Skip,
            component: FailureAction::Skip,
            exercise: FailureAction::Skip,
        }
    }
}

impl ErrorPolicy {
    /// Abort on the first failure at any level.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            program: FailureAction::Abort,
            day: FailureAction::Abort,
            section: FailureAction::Abort,
            component: FailureAction::Abort,
            exercise: FailureAction::Abort,
        }
    }

    #[must_use]
    pub const fn action(&self, level: ImportLevel) -> FailureAction {
        match level {
            ImportLevel::Program => self.program,
            ImportLevel::Day => self.day,
            ImportLevel::Section => self.section,
            ImportLevel::Component => self.component,
            ImportLevel::Exercise => self.exercise,
        }
    }

    /// Replace the action for one level.
    #[must_use]
    pub const fn with(mut self, level: ImportLevel, action: FailureAction) -> Self {
        match level {
            ImportLevel::Program => self.program = action,
            ImportLevel::Day => self.day = action,
            ImportLevel::Section => self.section = action,
            ImportLevel::Component => self.component = action,
            ImportLevel::Exercise => self.exercise = action,
        }
        self
    }
}
